use crate::context::RequestContext;
use crate::error::{Error, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Method, Request, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::JSON_CONTENT_TYPE;
use super::builder::Client;
use super::response::{check_response, decode_response};

impl Client {
    /// Builds a signed request for `<endpoint><path>`.
    ///
    /// The path is appended verbatim and must already be escaped. When `body`
    /// is present it is serialized to JSON and `Content-Type` is set;
    /// otherwise the request has no body and no `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the body cannot be serialized or
    /// the joined URL does not parse.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::invalid_request(format!("JSON serialization failed: {e}")))?;

        let target = format!("{}{}", self.config().endpoint, path);
        let url = Url::parse(&target)
            .map_err(|e| Error::invalid_request(format!("Invalid request URL {target}: {e}")))?;

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        headers.insert(AUTHORIZATION, self.auth_header().clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, self.user_agent().clone());

        *request.body_mut() = body.map(Into::into);
        *request.timeout_mut() = Some(self.config().timeout);

        Ok(request)
    }

    /// Lowest-level call: build, execute, decode into `T`.
    ///
    /// Returns `Ok(None)` when a 2xx response has an empty body.
    #[instrument(name = "godaddy_call", skip(self, ctx, body), fields(method = %method, path = %path))]
    pub async fn call_api_with_context<B, T>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.new_request(method, path, body)?;
        let response = self.execute(ctx, request).await?;
        ctx.run(decode_response(response)).await?
    }

    /// [`call_api_with_context`](Self::call_api_with_context) without cancellation.
    pub async fn call_api<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_api_with_context(&RequestContext::background(), method, path, body)
            .await
    }

    /// Like [`call_api_with_context`](Self::call_api_with_context) but with
    /// no response target: the status is checked and the body discarded
    /// without being parsed.
    #[instrument(name = "godaddy_call_no_content", skip(self, ctx, body), fields(method = %method, path = %path))]
    pub async fn call_api_no_content<B>(
        &self,
        ctx: &RequestContext,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self.new_request(method, path, body)?;
        let response = self.execute(ctx, request).await?;
        ctx.run(check_response(response)).await?
    }

    // ==================== Verb Wrappers ====================

    /// `GET <path>`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.get_with_context(&RequestContext::background(), path)
            .await
    }

    /// `GET <path>` under `ctx`.
    pub async fn get_with_context<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Option<T>> {
        self.call_api_with_context::<(), T>(ctx, Method::GET, path, None)
            .await
    }

    /// `POST <path>` with an optional JSON body.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `POST <path>` under `ctx`.
    pub async fn post_with_context<B, T>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_api_with_context(ctx, Method::POST, path, body)
            .await
    }

    /// `PUT <path>` with an optional JSON body.
    pub async fn put<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.put_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `PUT <path>` under `ctx`.
    pub async fn put_with_context<B, T>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_api_with_context(ctx, Method::PUT, path, body)
            .await
    }

    /// `PATCH <path>` with an optional JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: Option<&B>) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.patch_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `PATCH <path>` under `ctx`.
    pub async fn patch_with_context<B, T>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call_api_with_context(ctx, Method::PATCH, path, body)
            .await
    }

    /// `DELETE <path>`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.delete_with_context(&RequestContext::background(), path)
            .await
    }

    /// `DELETE <path>` under `ctx`.
    pub async fn delete_with_context<T: DeserializeOwned>(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<Option<T>> {
        self.call_api_with_context::<(), T>(ctx, Method::DELETE, path, None)
            .await
    }

    // ==================== No-Target Verb Wrappers ====================
    //
    // Status is checked, the body is read and dropped unparsed.

    /// `GET <path>` without decoding the response.
    pub async fn get_no_content(&self, path: &str) -> Result<()> {
        self.get_no_content_with_context(&RequestContext::background(), path)
            .await
    }

    /// `GET <path>` under `ctx` without decoding the response.
    pub async fn get_no_content_with_context(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<()> {
        self.call_api_no_content::<()>(ctx, Method::GET, path, None)
            .await
    }

    /// `POST <path>` without decoding the response.
    pub async fn post_no_content<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.post_no_content_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `POST <path>` under `ctx` without decoding the response.
    pub async fn post_no_content_with_context<B>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.call_api_no_content(ctx, Method::POST, path, body)
            .await
    }

    /// `PUT <path>` without decoding the response.
    pub async fn put_no_content<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.put_no_content_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `PUT <path>` under `ctx` without decoding the response.
    pub async fn put_no_content_with_context<B>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.call_api_no_content(ctx, Method::PUT, path, body)
            .await
    }

    /// `PATCH <path>` without decoding the response.
    pub async fn patch_no_content<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.patch_no_content_with_context(&RequestContext::background(), path, body)
            .await
    }

    /// `PATCH <path>` under `ctx` without decoding the response.
    pub async fn patch_no_content_with_context<B>(
        &self,
        ctx: &RequestContext,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.call_api_no_content(ctx, Method::PATCH, path, body)
            .await
    }

    /// `DELETE <path>` without decoding the response.
    pub async fn delete_no_content(&self, path: &str) -> Result<()> {
        self.delete_no_content_with_context(&RequestContext::background(), path)
            .await
    }

    /// `DELETE <path>` under `ctx` without decoding the response.
    pub async fn delete_no_content_with_context(
        &self,
        ctx: &RequestContext,
        path: &str,
    ) -> Result<()> {
        self.call_api_no_content::<()>(ctx, Method::DELETE, path, None)
            .await
    }
}
