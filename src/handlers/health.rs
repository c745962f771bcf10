use actix_web::{HttpResponse, get};

/// 헬스체크 엔드포인트
///
/// 로드밸런서가 확인하는 평문 응답입니다. 봉투로 감싸지 않습니다.
#[get("/")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("Healthy")
}
