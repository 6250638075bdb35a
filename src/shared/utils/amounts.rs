// UI 수량 ↔ base unit 변환, 슬리피지(%) → bps 변환
// 스왑 화면에서 사용자가 입력한 값을 Jupiter가 받는 형식으로 바꿉니다.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};

/// 허용하는 최대 토큰 decimals (10^18까지 Decimal 범위 안에서 안전)
pub const MAX_TOKEN_DECIMALS: u8 = 18;

pub const DEFAULT_SLIPPAGE_PERCENT: f64 = 0.5;
pub const MIN_SLIPPAGE_PERCENT: f64 = 0.01;
pub const MAX_SLIPPAGE_PERCENT: f64 = 5.0;
pub const MAX_SLIPPAGE_BPS: u32 = 500;

fn pow10(decimals: u8) -> Option<Decimal> {
    if decimals > MAX_TOKEN_DECIMALS {
        return None;
    }
    Some(Decimal::from_i128_with_scale(10i128.pow(decimals as u32), 0))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// UI 수량을 base unit으로 변환 (`floor(amount * 10^decimals)`)
///
/// 0 이하이거나 변환 후 0이 되면 None
///
/// # Examples
/// - "1.5" SOL (9 decimals) → 1_500_000_000
/// - "0.0000001" USDC (6 decimals) → None (0으로 내림)
pub fn ui_to_base_units(amount: &str, decimals: u8) -> Option<u64> {
    let amount = parse_decimal(amount)?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let scaled = amount.checked_mul(pow10(decimals)?)?.floor();
    scaled.to_u64().filter(|v| *v > 0)
}

/// base unit 수량을 UI 수량 문자열로 변환 (소수점 `places`자리 고정)
///
/// # Examples
/// - ("1234567", 6, 6) → "1.234567"
/// - ("5", 9, 6) → "0.000000"
pub fn base_units_to_ui(amount: &str, decimals: u8, places: u32) -> Option<String> {
    let amount = parse_decimal(amount)?;
    let ui = amount.checked_div(pow10(decimals)?)?;
    let mut ui = ui.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    ui.rescale(places);
    Some(ui.to_string())
}

/// decimals 문자열 파싱 (0..=18 정수가 아니면 `default`)
pub fn parse_decimals(raw: Option<&str>, default: u8) -> u8 {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .filter(|d| *d <= MAX_TOKEN_DECIMALS)
        .unwrap_or(default)
}

/// 슬리피지(%) 문자열을 bps로 변환
///
/// - 파싱 실패 또는 0 → 기본값 0.5%
/// - 0.01% ~ 5% 범위로 clamp
/// - bps = max(1, round(% * 100)), 최대 500
pub fn slippage_percent_to_bps(raw: Option<&str>) -> u32 {
    let percent = raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p != 0.0)
        .unwrap_or(DEFAULT_SLIPPAGE_PERCENT);
    let clamped = percent.clamp(MIN_SLIPPAGE_PERCENT, MAX_SLIPPAGE_PERCENT);
    let bps = (clamped * 100.0).round() as u32;
    bps.clamp(1, MAX_SLIPPAGE_BPS)
}

/// 소수점 `places`자리 고정 문자열
pub fn to_fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_to_base_units_floors() {
        assert_eq!(ui_to_base_units("1.5", 9), Some(1_500_000_000));
        assert_eq!(ui_to_base_units("1.2345679", 6), Some(1_234_567));
        assert_eq!(ui_to_base_units("  2 ", 6), Some(2_000_000));
        assert_eq!(ui_to_base_units("1e-3", 6), Some(1_000));
    }

    #[test]
    fn test_ui_to_base_units_rejects_invalid() {
        assert_eq!(ui_to_base_units("", 9), None);
        assert_eq!(ui_to_base_units("abc", 9), None);
        assert_eq!(ui_to_base_units("0", 9), None);
        assert_eq!(ui_to_base_units("-1", 9), None);
        assert_eq!(ui_to_base_units("0.0000001", 6), None);
        assert_eq!(ui_to_base_units("1", 40), None);
    }

    #[test]
    fn test_base_units_to_ui() {
        assert_eq!(base_units_to_ui("1234567", 6, 6).as_deref(), Some("1.234567"));
        assert_eq!(base_units_to_ui("150000000", 9, 6).as_deref(), Some("0.150000"));
        assert_eq!(base_units_to_ui("5", 9, 6).as_deref(), Some("0.000000"));
        assert_eq!(base_units_to_ui("1999999999", 9, 6).as_deref(), Some("2.000000"));
        assert_eq!(base_units_to_ui("not-a-number", 9, 6), None);
    }

    #[test]
    fn test_parse_decimals_defaults() {
        assert_eq!(parse_decimals(Some("6"), 9), 6);
        assert_eq!(parse_decimals(Some(" 0 "), 9), 0);
        assert_eq!(parse_decimals(Some(""), 9), 9);
        assert_eq!(parse_decimals(Some("abc"), 9), 9);
        assert_eq!(parse_decimals(Some("-1"), 9), 9);
        assert_eq!(parse_decimals(Some("40"), 9), 9);
        assert_eq!(parse_decimals(None, 9), 9);
    }

    #[test]
    fn test_slippage_percent_to_bps() {
        assert_eq!(slippage_percent_to_bps(None), 50);
        assert_eq!(slippage_percent_to_bps(Some("")), 50);
        assert_eq!(slippage_percent_to_bps(Some("0")), 50);
        assert_eq!(slippage_percent_to_bps(Some("1")), 100);
        assert_eq!(slippage_percent_to_bps(Some("0.1")), 10);
        assert_eq!(slippage_percent_to_bps(Some("0.001")), 1);
        assert_eq!(slippage_percent_to_bps(Some("-3")), 1);
        assert_eq!(slippage_percent_to_bps(Some("12")), 500);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(12.3456, 2), "12.35");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }
}
