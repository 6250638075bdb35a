/// 공유 유틸리티 모듈
/// Shared Utilities Module
///
/// 역할:
/// - 업스트림 JSON 응답을 방어적으로 읽는 헬퍼
/// - UI 수량 ↔ base unit 변환, 슬리피지 변환
pub mod amounts;
pub mod json;

pub use amounts::*;
pub use json::*;
