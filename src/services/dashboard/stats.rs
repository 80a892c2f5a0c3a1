use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use moka::sync::Cache;
use once_cell::sync::Lazy;
use std::time::Duration;

use crate::config::AppConfig;
use crate::ledger::stats as ledger_stats;
use crate::models::dashboard::responses::{DashboardStats, DashboardStatsResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::DashboardService;

// 统计缓存。单键，TTL 独立于通用缓存配置，到期后下一次请求触发重算。
static STATS_CACHE: Lazy<Cache<u8, (DashboardStats, i64)>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(1)
        .time_to_live(Duration::from_secs(AppConfig::get().cache.dashboard_ttl))
        .build()
});

const STATS_KEY: u8 = 0;

pub async fn get_stats(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some((stats, generated_at)) = STATS_CACHE.get(&STATS_KEY) {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            DashboardStatsResponse {
                stats,
                generated_at,
            },
            "查询成功",
        )));
    }

    let storage = service.get_storage(request);

    let assignments = match storage.list_all_assignments().await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询统计失败: {e}"),
                )),
            );
        }
    };

    let now = chrono::Utc::now();
    let stats = ledger_stats::summarize(&assignments, now);
    let generated_at = now.timestamp();

    STATS_CACHE.insert(STATS_KEY, (stats.clone(), generated_at));
    tracing::debug!(
        "Dashboard stats recomputed over {} assignments",
        assignments.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardStatsResponse {
            stats,
            generated_at,
        },
        "查询成功",
    )))
}
