//! Small helpers shared across crates

/// Current wall-clock time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a roughly time-ordered unique id.
///
/// Layout: 41 bits of milliseconds since 2024-01-01 followed by 12 random
/// bits. Collisions require two ids in the same millisecond drawing the same
/// random suffix, which is acceptable for single-instance row ids.
pub fn snowflake_id() -> i64 {
    use rand::Rng;

    const EPOCH_MS: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}
