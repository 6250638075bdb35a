use utoipa::OpenApi;

// Import models for OpenAPI schema
use crate::domains::swap::models::*;
use crate::domains::tokens::models::*;
use crate::domains::market::models::*;
use crate::domains::wallet::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::swap::handlers::quote_handler::get_quote,
        crate::domains::swap::handlers::quote_handler::preview_quote,
        crate::domains::swap::handlers::swap_handler::create_swap_transaction,
        crate::domains::tokens::handlers::token_handler::search_tokens,
        crate::domains::tokens::handlers::token_handler::get_popular_tokens,
        crate::domains::market::handlers::price_handler::get_sol_price,
        crate::domains::wallet::handlers::balance_handler::get_balance,
        crate::domains::links::handlers::redirect_handler::redirect_to_luma
    ),
    components(schemas(
        ProxyResponse,
        SwapStage,
        QuoteRequest,
        QuotePreviewRequest,
        QuotePreview,
        SwapTransactionRequest,
        TokenInfo,
        TokenSearchRequest,
        TokenSearchResult,
        TokenSearchResponse,
        PopularTokensResponse,
        SolPriceResponse,
        BalanceRequest,
        BalanceResponse
    )),
    tags(
        (name = "Swap", description = "Quote and swap transaction proxy (Jupiter)"),
        (name = "Tokens", description = "Token search and popular tokens (SolanaTracker, Jupiter fallback)"),
        (name = "Market", description = "SOL/USD price"),
        (name = "Wallet", description = "Wallet balances (Solana RPC)"),
        (name = "Links", description = "External redirects")
    ),
    info(
        title = "Luma Exchange API",
        description = "Swap gateway for the Luma Exchange web UI",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;
