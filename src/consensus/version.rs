//! Protocol version gate
//!
//! Peer-version floors and feature-introduction versions. These apply to every
//! network identically; nothing here depends on the selected profile.

use serde::Serialize;

/// Wire features gated on the peer's protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Feature {
    /// `getheaders` and headers-first sync
    HeadersFirstSync,
    /// `nTime` carried in address messages
    AddressTimestamps,
    /// `filter*` commands accepted without the bloom service bit
    ImplicitBloomFilter,
    /// `pong` replies to `ping` (BIP 31)
    Pong,
    /// `mempool` command and extended `getdata`
    MempoolCommand,
    /// Masternode messages signed with the fixed sigtime rules
    FixedSigTime,
    /// New `mnannounce` message format
    NewMnAnnounce,
    /// Fake stake mitigations
    FakeStakeMitigation,
    /// Minimum stake input enforcement
    StakeV2,
    /// Peer may be asked for blocks
    BlockRelay,
}

/// Absolute-time rule changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeActivation {
    /// Block time target change (block 18400)
    BlockTimeTarget,
    /// Staking rule change for segwit outputs
    StakingOnSegwit,
}

/// Protocol version thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionThresholds {
    pub protocol_version: i32,
    /// Initial version, raised after version/verack negotiation
    pub init_proto_version: i32,
    pub min_peer_proto_version_before_enforcement: i32,
    pub min_peer_proto_version_after_enforcement: i32,
    /// Wall-clock time at which the stricter peer floor applies
    pub enforcement_time: i64,
    pub getheaders_version: i32,
    pub caddr_time_version: i32,
    pub no_bloom_version: i32,
    /// Pong is enabled for versions strictly after this one
    pub bip0031_version: i32,
    pub mempool_gd_version: i32,
    pub min_peer_version_fixed_sigtime: i32,
    pub min_peer_mnannounce: i32,
    pub fake_stake_version: i32,
    pub stake_v2_version: i32,
    /// Blocks are not requested from peers in `[noblks_version_start, noblks_version_end)`
    pub noblks_version_start: i32,
    pub noblks_version_end: i32,
    pub block_time_target_time: i64,
    pub staking_on_segwit_time: i64,
}

/// The version table shared by every network
pub const VERSION_THRESHOLDS: VersionThresholds = VersionThresholds {
    protocol_version: 72010,
    init_proto_version: 209,
    min_peer_proto_version_before_enforcement: 72009,
    min_peer_proto_version_after_enforcement: 72010,
    enforcement_time: 1563580800, // 07/20/2019 @ 12:00am (UTC)
    getheaders_version: 70077,
    caddr_time_version: 31402,
    no_bloom_version: 70005,
    bip0031_version: 60000,
    mempool_gd_version: 60002,
    min_peer_version_fixed_sigtime: 72006,
    min_peer_mnannounce: 70003,
    fake_stake_version: 72001,
    stake_v2_version: 72001,
    noblks_version_start: 32000,
    noblks_version_end: 70700,
    block_time_target_time: 1563677813, // 07/21/2019 @ 2:56am (UTC)
    staking_on_segwit_time: 1563723293, // 07/21/2019 @ 3:34pm (UTC)
};

impl VersionThresholds {
    /// Minimum acceptable peer version at wall-clock time `now`
    pub fn min_peer_version(&self, now: i64) -> i32 {
        if now < self.enforcement_time {
            self.min_peer_proto_version_before_enforcement
        } else {
            self.min_peer_proto_version_after_enforcement
        }
    }

    /// Whether a peer advertising `peer_version` should be disconnected
    pub fn is_obsolete_peer(&self, peer_version: i32, now: i64) -> bool {
        peer_version < self.min_peer_version(now)
    }

    /// Whether a peer at `peer_version` speaks `feature`
    pub fn supports_feature(&self, peer_version: i32, feature: Feature) -> bool {
        match feature {
            Feature::HeadersFirstSync => peer_version >= self.getheaders_version,
            Feature::AddressTimestamps => peer_version >= self.caddr_time_version,
            Feature::ImplicitBloomFilter => peer_version < self.no_bloom_version,
            Feature::Pong => peer_version > self.bip0031_version,
            Feature::MempoolCommand => peer_version >= self.mempool_gd_version,
            Feature::FixedSigTime => peer_version >= self.min_peer_version_fixed_sigtime,
            Feature::NewMnAnnounce => peer_version >= self.min_peer_mnannounce,
            Feature::FakeStakeMitigation => peer_version >= self.fake_stake_version,
            Feature::StakeV2 => peer_version >= self.stake_v2_version,
            Feature::BlockRelay => {
                peer_version < self.noblks_version_start || peer_version >= self.noblks_version_end
            }
        }
    }

    /// Whether an absolute-time rule change is in force at `now`
    pub fn is_time_activated(&self, activation: TimeActivation, now: i64) -> bool {
        let stamp = match activation {
            TimeActivation::BlockTimeTarget => self.block_time_target_time,
            TimeActivation::StakingOnSegwit => self.staking_on_segwit_time,
        };
        now >= stamp
    }
}
