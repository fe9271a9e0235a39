//! Released broker versions.
//!
//! Pre-1.0 releases carry a meaningful fourth component; from 1.0 onwards the
//! fourth component is always zero.

use super::KafkaVersion;

/// Broker release 0.8.2.0.
pub const V0_8_2_0: KafkaVersion = KafkaVersion::new(0, 8, 2, 0);
/// Broker release 0.8.2.1.
pub const V0_8_2_1: KafkaVersion = KafkaVersion::new(0, 8, 2, 1);
/// Broker release 0.8.2.2.
pub const V0_8_2_2: KafkaVersion = KafkaVersion::new(0, 8, 2, 2);
/// Broker release 0.9.0.0.
pub const V0_9_0_0: KafkaVersion = KafkaVersion::new(0, 9, 0, 0);
/// Broker release 0.9.0.1.
pub const V0_9_0_1: KafkaVersion = KafkaVersion::new(0, 9, 0, 1);
/// Broker release 0.10.0.0.
pub const V0_10_0_0: KafkaVersion = KafkaVersion::new(0, 10, 0, 0);
/// Broker release 0.10.0.1.
pub const V0_10_0_1: KafkaVersion = KafkaVersion::new(0, 10, 0, 1);
/// Broker release 0.10.1.0.
pub const V0_10_1_0: KafkaVersion = KafkaVersion::new(0, 10, 1, 0);
/// Broker release 0.10.1.1.
pub const V0_10_1_1: KafkaVersion = KafkaVersion::new(0, 10, 1, 1);
/// Broker release 0.10.2.0.
pub const V0_10_2_0: KafkaVersion = KafkaVersion::new(0, 10, 2, 0);
/// Broker release 0.10.2.1.
pub const V0_10_2_1: KafkaVersion = KafkaVersion::new(0, 10, 2, 1);
/// Broker release 0.10.2.2.
pub const V0_10_2_2: KafkaVersion = KafkaVersion::new(0, 10, 2, 2);
/// Broker release 0.11.0.0.
pub const V0_11_0_0: KafkaVersion = KafkaVersion::new(0, 11, 0, 0);
/// Broker release 0.11.0.1.
pub const V0_11_0_1: KafkaVersion = KafkaVersion::new(0, 11, 0, 1);
/// Broker release 0.11.0.2.
pub const V0_11_0_2: KafkaVersion = KafkaVersion::new(0, 11, 0, 2);
/// Broker release 1.0.0.
pub const V1_0_0_0: KafkaVersion = KafkaVersion::new(1, 0, 0, 0);
/// Broker release 1.0.1.
pub const V1_0_1_0: KafkaVersion = KafkaVersion::new(1, 0, 1, 0);
/// Broker release 1.0.2.
pub const V1_0_2_0: KafkaVersion = KafkaVersion::new(1, 0, 2, 0);
/// Broker release 1.1.0.
pub const V1_1_0_0: KafkaVersion = KafkaVersion::new(1, 1, 0, 0);
/// Broker release 1.1.1.
pub const V1_1_1_0: KafkaVersion = KafkaVersion::new(1, 1, 1, 0);
/// Broker release 2.0.0.
pub const V2_0_0_0: KafkaVersion = KafkaVersion::new(2, 0, 0, 0);
/// Broker release 2.0.1.
pub const V2_0_1_0: KafkaVersion = KafkaVersion::new(2, 0, 1, 0);
/// Broker release 2.1.0.
pub const V2_1_0_0: KafkaVersion = KafkaVersion::new(2, 1, 0, 0);
/// Broker release 2.1.1.
pub const V2_1_1_0: KafkaVersion = KafkaVersion::new(2, 1, 1, 0);
/// Broker release 2.2.0.
pub const V2_2_0_0: KafkaVersion = KafkaVersion::new(2, 2, 0, 0);
/// Broker release 2.2.1.
pub const V2_2_1_0: KafkaVersion = KafkaVersion::new(2, 2, 1, 0);
/// Broker release 2.2.2.
pub const V2_2_2_0: KafkaVersion = KafkaVersion::new(2, 2, 2, 0);
/// Broker release 2.3.0.
pub const V2_3_0_0: KafkaVersion = KafkaVersion::new(2, 3, 0, 0);
/// Broker release 2.3.1.
pub const V2_3_1_0: KafkaVersion = KafkaVersion::new(2, 3, 1, 0);
/// Broker release 2.4.0.
pub const V2_4_0_0: KafkaVersion = KafkaVersion::new(2, 4, 0, 0);
/// Broker release 2.4.1.
pub const V2_4_1_0: KafkaVersion = KafkaVersion::new(2, 4, 1, 0);
/// Broker release 2.5.0.
pub const V2_5_0_0: KafkaVersion = KafkaVersion::new(2, 5, 0, 0);
/// Broker release 2.5.1.
pub const V2_5_1_0: KafkaVersion = KafkaVersion::new(2, 5, 1, 0);
/// Broker release 2.6.0.
pub const V2_6_0_0: KafkaVersion = KafkaVersion::new(2, 6, 0, 0);
/// Broker release 2.6.1.
pub const V2_6_1_0: KafkaVersion = KafkaVersion::new(2, 6, 1, 0);
/// Broker release 2.6.2.
pub const V2_6_2_0: KafkaVersion = KafkaVersion::new(2, 6, 2, 0);
/// Broker release 2.6.3.
pub const V2_6_3_0: KafkaVersion = KafkaVersion::new(2, 6, 3, 0);
/// Broker release 2.7.0.
pub const V2_7_0_0: KafkaVersion = KafkaVersion::new(2, 7, 0, 0);
/// Broker release 2.7.1.
pub const V2_7_1_0: KafkaVersion = KafkaVersion::new(2, 7, 1, 0);
/// Broker release 2.7.2.
pub const V2_7_2_0: KafkaVersion = KafkaVersion::new(2, 7, 2, 0);
/// Broker release 2.8.0.
pub const V2_8_0_0: KafkaVersion = KafkaVersion::new(2, 8, 0, 0);
/// Broker release 2.8.1.
pub const V2_8_1_0: KafkaVersion = KafkaVersion::new(2, 8, 1, 0);
/// Broker release 2.8.2.
pub const V2_8_2_0: KafkaVersion = KafkaVersion::new(2, 8, 2, 0);
/// Broker release 3.0.0.
pub const V3_0_0_0: KafkaVersion = KafkaVersion::new(3, 0, 0, 0);
/// Broker release 3.0.1.
pub const V3_0_1_0: KafkaVersion = KafkaVersion::new(3, 0, 1, 0);
/// Broker release 3.0.2.
pub const V3_0_2_0: KafkaVersion = KafkaVersion::new(3, 0, 2, 0);
/// Broker release 3.1.0.
pub const V3_1_0_0: KafkaVersion = KafkaVersion::new(3, 1, 0, 0);
/// Broker release 3.1.1.
pub const V3_1_1_0: KafkaVersion = KafkaVersion::new(3, 1, 1, 0);
/// Broker release 3.1.2.
pub const V3_1_2_0: KafkaVersion = KafkaVersion::new(3, 1, 2, 0);
/// Broker release 3.2.0.
pub const V3_2_0_0: KafkaVersion = KafkaVersion::new(3, 2, 0, 0);
/// Broker release 3.2.1.
pub const V3_2_1_0: KafkaVersion = KafkaVersion::new(3, 2, 1, 0);
/// Broker release 3.2.2.
pub const V3_2_2_0: KafkaVersion = KafkaVersion::new(3, 2, 2, 0);
/// Broker release 3.2.3.
pub const V3_2_3_0: KafkaVersion = KafkaVersion::new(3, 2, 3, 0);
/// Broker release 3.3.0.
pub const V3_3_0_0: KafkaVersion = KafkaVersion::new(3, 3, 0, 0);
/// Broker release 3.3.1.
pub const V3_3_1_0: KafkaVersion = KafkaVersion::new(3, 3, 1, 0);
/// Broker release 3.3.2.
pub const V3_3_2_0: KafkaVersion = KafkaVersion::new(3, 3, 2, 0);
/// Broker release 3.4.0.
pub const V3_4_0_0: KafkaVersion = KafkaVersion::new(3, 4, 0, 0);
/// Broker release 3.4.1.
pub const V3_4_1_0: KafkaVersion = KafkaVersion::new(3, 4, 1, 0);
/// Broker release 3.5.0.
pub const V3_5_0_0: KafkaVersion = KafkaVersion::new(3, 5, 0, 0);
/// Broker release 3.5.1.
pub const V3_5_1_0: KafkaVersion = KafkaVersion::new(3, 5, 1, 0);
/// Broker release 3.5.2.
pub const V3_5_2_0: KafkaVersion = KafkaVersion::new(3, 5, 2, 0);
/// Broker release 3.6.0.
pub const V3_6_0_0: KafkaVersion = KafkaVersion::new(3, 6, 0, 0);
/// Broker release 3.6.1.
pub const V3_6_1_0: KafkaVersion = KafkaVersion::new(3, 6, 1, 0);
/// Broker release 3.6.2.
pub const V3_6_2_0: KafkaVersion = KafkaVersion::new(3, 6, 2, 0);
/// Broker release 3.7.0.
pub const V3_7_0_0: KafkaVersion = KafkaVersion::new(3, 7, 0, 0);
/// Broker release 3.7.1.
pub const V3_7_1_0: KafkaVersion = KafkaVersion::new(3, 7, 1, 0);
/// Broker release 3.7.2.
pub const V3_7_2_0: KafkaVersion = KafkaVersion::new(3, 7, 2, 0);
/// Broker release 3.8.0.
pub const V3_8_0_0: KafkaVersion = KafkaVersion::new(3, 8, 0, 0);
/// Broker release 3.8.1.
pub const V3_8_1_0: KafkaVersion = KafkaVersion::new(3, 8, 1, 0);
/// Broker release 3.9.0.
pub const V3_9_0_0: KafkaVersion = KafkaVersion::new(3, 9, 0, 0);
/// Broker release 4.0.0.
pub const V4_0_0_0: KafkaVersion = KafkaVersion::new(4, 0, 0, 0);

/// Every released broker version this client knows, oldest first.
pub const SUPPORTED_VERSIONS: &[KafkaVersion] = &[
    V0_8_2_0,
    V0_8_2_1,
    V0_8_2_2,
    V0_9_0_0,
    V0_9_0_1,
    V0_10_0_0,
    V0_10_0_1,
    V0_10_1_0,
    V0_10_1_1,
    V0_10_2_0,
    V0_10_2_1,
    V0_10_2_2,
    V0_11_0_0,
    V0_11_0_1,
    V0_11_0_2,
    V1_0_0_0,
    V1_0_1_0,
    V1_0_2_0,
    V1_1_0_0,
    V1_1_1_0,
    V2_0_0_0,
    V2_0_1_0,
    V2_1_0_0,
    V2_1_1_0,
    V2_2_0_0,
    V2_2_1_0,
    V2_2_2_0,
    V2_3_0_0,
    V2_3_1_0,
    V2_4_0_0,
    V2_4_1_0,
    V2_5_0_0,
    V2_5_1_0,
    V2_6_0_0,
    V2_6_1_0,
    V2_6_2_0,
    V2_6_3_0,
    V2_7_0_0,
    V2_7_1_0,
    V2_7_2_0,
    V2_8_0_0,
    V2_8_1_0,
    V2_8_2_0,
    V3_0_0_0,
    V3_0_1_0,
    V3_0_2_0,
    V3_1_0_0,
    V3_1_1_0,
    V3_1_2_0,
    V3_2_0_0,
    V3_2_1_0,
    V3_2_2_0,
    V3_2_3_0,
    V3_3_0_0,
    V3_3_1_0,
    V3_3_2_0,
    V3_4_0_0,
    V3_4_1_0,
    V3_5_0_0,
    V3_5_1_0,
    V3_5_2_0,
    V3_6_0_0,
    V3_6_1_0,
    V3_6_2_0,
    V3_7_0_0,
    V3_7_1_0,
    V3_7_2_0,
    V3_8_0_0,
    V3_8_1_0,
    V3_9_0_0,
    V4_0_0_0,
];

/// Oldest supported broker version.
pub const MIN_VERSION: KafkaVersion = V0_8_2_0;

/// Newest supported broker version.
pub const MAX_VERSION: KafkaVersion = V4_0_0_0;

/// Version assumed when none is configured or the configured one is invalid.
pub const DEFAULT_VERSION: KafkaVersion = V2_1_0_0;
