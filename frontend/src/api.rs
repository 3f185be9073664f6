use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use shared::*;
use crate::config::CONFIG;

fn url(path: &str) -> String {
    format!("{}{}", CONFIG.api_base_url, path)
}

async fn send(request: Request) -> Result<Response> {
    let response = request.send().await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    warn!(status, body = %body, url = %response.url(), "request failed");
    Err(ApiError::server(status, &body))
}

async fn json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Mutation responses come back as `{"message": ..}`, plain text, or nothing.
async fn message(response: Response) -> Result<MessageResponse> {
    let text = response.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if text.trim().is_empty() {
        return Ok(MessageResponse::default());
    }
    Ok(serde_json::from_str(&text).unwrap_or(MessageResponse { message: Some(text) }))
}

fn with_body<T: serde::Serialize>(request: Request, body: &T) -> Result<Request> {
    request.json(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn list_events() -> Result<Vec<DatingEventCard>> {
    debug!("fetching events");
    json(send(Request::get(&url("/dating/dating-events"))).await?).await
}

pub async fn event(event_id: EventId) -> Result<DatingEvent> {
    debug!(event_id, "fetching event");
    json(send(Request::get(&url(&format!("/dating/dating-events/{event_id}")))).await?).await
}

pub async fn join_event(event_id: EventId, user_id: UserId) -> Result<DatingEvent> {
    debug!(event_id, user_id, "joining event");
    let path = format!("/dating/dating-events/{event_id}/join?userId={user_id}");
    json(send(Request::post(&url(&path))).await?).await
}

pub async fn votes(host_id: UserId, event_id: EventId) -> Result<Vec<Vote>> {
    debug!(host_id, event_id, "fetching votes");
    let path = format!("/hosts/{host_id}/dating-events/{event_id}/votes");
    let responses: Vec<VoteResponse> = json(send(Request::get(&url(&path))).await?).await?;
    votes_from_responses(responses).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn create_vote(host_id: UserId, event_id: EventId, request: &CreateVoteRequest) -> Result<MessageResponse> {
    debug!(host_id, event_id, title = %request.title, "creating vote");
    let path = format!("/hosts/{host_id}/dating-events/{event_id}/votes");
    message(send(with_body(Request::post(&url(&path)), request)?).await?).await
}

pub async fn cast_vote(request: CastVoteRequest) -> Result<MessageResponse> {
    let CastVoteRequest { user_id, event_id, vote_id, option_id } = request;
    let path = format!("/users/{user_id}/dating-events/{event_id}/votes/{vote_id}?optionId={option_id}");
    message(send(Request::patch(&url(&path))).await?).await
}

pub async fn user_events(user_id: UserId) -> Result<Vec<DatingEventCard>> {
    debug!(user_id, "fetching joined events");
    json(send(Request::get(&url(&format!("/users/{user_id}/dating-events")))).await?).await
}

pub async fn leave_event(user_id: UserId, event_id: EventId) -> Result<MessageResponse> {
    debug!(user_id, event_id, "leaving event");
    let path = format!("/users/{user_id}/dating-events/{event_id}/leave");
    message(send(Request::patch(&url(&path))).await?).await
}

pub async fn create_event(host_id: UserId, request: &CreateEventRequest) -> Result<DatingEvent> {
    debug!(host_id, title = %request.title, "creating event");
    let path = format!("/hosts/{host_id}/dating-events");
    json(send(with_body(Request::post(&url(&path)), request)?).await?).await
}

pub async fn register(request: &SignupRequest) -> Result<User> {
    json(send(with_body(Request::post(&url("/user/users")), request)?).await?).await
}

pub async fn users() -> Result<Vec<User>> {
    json(send(Request::get(&url("/user/users"))).await?).await
}

pub async fn user(user_id: UserId) -> Result<User> {
    json(send(Request::get(&url(&format!("/user/users/{user_id}")))).await?).await
}

pub async fn login(request: &LoginRequest) -> Result<MessageResponse> {
    message(send(with_body(Request::post(&url("/auth/login")), request)?).await?).await
}

pub async fn find_email(request: &FindEmailRequest) -> Result<MessageResponse> {
    message(send(with_body(Request::post(&url("/user/find-email")), request)?).await?).await
}
