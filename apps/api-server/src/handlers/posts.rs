//! Post handlers.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::de::DeserializeOwned;

use feed_core::domain::{Post, PostDraft, PostPatch};
use feed_shared::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Route name of a single post, used to build `Location` headers.
pub const POST_RESOURCE: &str = "post";

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts
pub async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let draft = parse_body::<CreatePostRequest>(&body)?.map(|input| PostDraft {
        id: input.id,
        author: input.author,
        content: input.content,
        image_url: input.image_url,
    });

    let post = state.posts.create(draft).await?;

    let location = req
        .url_for(POST_RESOURCE, [post.id.to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .json(to_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let patch = parse_body::<UpdatePostRequest>(&body)?.map(|input| PostPatch {
        author: input.author,
        content: input.content,
        image_url: input.image_url,
    });

    let post = state.posts.update(path.into_inner(), patch).await?;
    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    state.posts.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Decode an optional JSON body.
///
/// An empty body or a literal `null` yields `None` so the service can report
/// the missing body itself.
fn parse_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<Option<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice::<Option<T>>(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author: post.author,
        content: post.content,
        image_url: post.image_url,
        created_at: post.created_at,
        modified_at: post.modified_at,
    }
}
