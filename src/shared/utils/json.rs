//! 업스트림 JSON 응답을 방어적으로 읽는 헬퍼
//!
//! Jupiter / SolanaTracker 응답은 버전이나 엔드포인트에 따라 모양이 달라서
//! (`data` 아래에 중첩되거나, 필드 이름이 `mint`/`address` 등으로 다름)
//! 구조체로 바로 파싱하지 않고 `serde_json::Value`에서 필요한 값만 꺼냅니다.

use serde_json::Value;

/// 토큰 decimals가 없을 때 사용하는 기본값
pub const DEFAULT_DECIMALS: u8 = 9;

/// 값이 "비어 있지 않은지" (null, false, 0, NaN, "" → false)
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `data`가 비어 있지 않으면 `data`, 아니면 본문 전체
///
/// 일부 엔드포인트는 결과를 `data` 아래에 중첩해서 반환합니다.
pub fn unwrap_data(body: Value) -> Value {
    match body.get("data") {
        Some(inner) if is_truthy(inner) => inner.clone(),
        _ => body,
    }
}

/// `error`가 null이 아니면 `error`, 아니면 본문 전체
pub fn error_or_body(body: &Value) -> Value {
    match body.get("error") {
        Some(err) if !err.is_null() => err.clone(),
        _ => body.clone(),
    }
}

/// `message`가 비어 있지 않으면 `message`, 아니면 본문 전체
pub fn message_or_body(body: &Value) -> Value {
    match body.get("message") {
        Some(msg) if is_truthy(msg) => msg.clone(),
        _ => body.clone(),
    }
}

/// 여러 후보 키 중 처음으로 비어 있지 않은 문자열 값
/// First non-empty string among candidate keys
pub fn first_str(obj: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// JSON number 타입일 때만 f64로 반환 (숫자 문자열은 무시)
pub fn number_field(obj: &Value, key: &str) -> Option<f64> {
    obj.get(key)
        .filter(|v| v.is_number())
        .and_then(Value::as_f64)
        .filter(|f| f.is_finite())
}

/// 숫자 `decimals` 필드, 없거나 범위 밖이면 9
pub fn decimals_or_default(obj: &Value) -> u8 {
    number_field(obj, "decimals")
        .filter(|d| d.fract() == 0.0 && *d >= 0.0 && *d <= u8::MAX as f64)
        .map(|d| d as u8)
        .unwrap_or(DEFAULT_DECIMALS)
}

/// 문자열 또는 숫자 값을 문자열로 (JSON body의 `amount`, `slippageBps` 용)
pub fn string_or_number(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
