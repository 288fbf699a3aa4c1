use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::Pool;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the database and the session blacklist store
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!("Readiness: database check failed: {}", e);
            "unhealthy"
        }
    };

    let redis_status = match redis.get().await {
        Ok(mut conn) => match deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
        {
            Ok(_) => "ok",
            Err(e) => {
                tracing::error!("Readiness: redis PING failed: {}", e);
                "unhealthy"
            }
        },
        Err(e) => {
            tracing::error!("Readiness: redis pool unavailable: {}", e);
            "unhealthy"
        }
    };

    let body = ReadinessResponse {
        status: if db_status == "ok" && redis_status == "ok" {
            "ok"
        } else {
            "unhealthy"
        },
        database: db_status,
        redis: redis_status,
    };

    if body.status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
