// Luma Exchange API server library
// 통합 테스트에서 라우터와 상태를 직접 조립할 수 있도록 모듈을 공개합니다.
pub mod domains;
pub mod routes;
pub mod shared;
