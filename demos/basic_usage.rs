// ============================================================================
// Basic Usage Example
// ============================================================================

use time64_transform::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    time64_transform::utils::init_logging();

    println!("=== Time64 Transform Example ===\n");

    let config = ScaleConfig::millis();
    let multiplier = ScaleMultiplier::MILLIS;

    let to_unix = create_from_config::<ToUnixTimestamp>(&config).unwrap();
    let to_second = create_from_config::<ToSecond>(&config).unwrap();
    let to_day = create_from_config::<ToDayNum>(&config).unwrap();
    let start_of_second = create_from_config::<ToStartOfSecond>(&config).unwrap();
    let start_of_minute = create_from_config::<ToStartOfInterval>(&config).unwrap();

    let samples = [
        Time64::from_raw(1_704_067_261_250), // 2024-01-01T00:01:01.250
        Time64::from_raw(1_500),
        Time64::from_raw(-1),
        Time64::from_raw(-1_500),
    ];

    for t in samples {
        println!("{} ({})", t.format_with_scale(3), fmt_datetime(t, multiplier));
        println!("  {:<18} {}", ToUnixTimestamp::NAME, to_unix.apply(t, ()));
        println!("  {:<18} {}", ToSecond::NAME, to_second.apply(t, ()));
        println!("  {:<18} {}", ToDayNum::NAME, to_day.apply_extended(t, ()));
        println!(
            "  {:<18} {}",
            ToStartOfSecond::NAME,
            start_of_second.apply(t, ()).format_with_scale(3)
        );
        match start_of_minute.apply(t, (60_000i64,)) {
            Ok(start) => println!(
                "  {:<18} {}",
                ToStartOfInterval::NAME,
                start.format_with_scale(3)
            ),
            Err(e) => println!("  {:<18} error: {}", ToStartOfInterval::NAME, e),
        }
        println!();
    }

    println!("=== Call Shapes ===");
    println!(
        "  {:<18} {}",
        ToUnixTimestamp::NAME,
        TransformTime64::<ToUnixTimestamp>::call_shape::<(), Standard>()
    );
    println!(
        "  {:<18} {}",
        ToStartOfSecond::NAME,
        TransformTime64::<ToStartOfSecond>::call_shape::<(), Standard>()
    );
    println!(
        "  {:<18} {}",
        ToStartOfInterval::NAME,
        TransformTime64::<ToStartOfInterval>::call_shape::<(i64,), Standard>()
    );
}

fn fmt_datetime(t: Time64, multiplier: ScaleMultiplier) -> String {
    t.to_datetime(multiplier)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string())
}
