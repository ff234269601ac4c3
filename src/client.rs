use {
  super::*,
  reqwest::{StatusCode, header::LOCATION, multipart, redirect},
};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: Url,
  client: reqwest::Client,
  strategy: PaginationStrategy,
}

impl Client {
  const AUTH_PATH: &str = "auth";

  const COMMENTS_ANCHOR: &str = "comments";

  const DELETE_PATH: &str = "delete-data";

  const UPLOAD_URL_PATH: &str = "blobstore-upload-url";

  pub(crate) async fn add_comment(
    &self,
    submission: &CommentSubmission,
  ) -> Result {
    let upload_url = self.fetch_upload_url().await?;

    tracing::info!(%upload_url, "posting comment");

    let form = multipart::Form::new()
      .text("comment-owner", submission.owner.clone())
      .text("comment-text", submission.text.clone());

    let response = self
      .client
      .post(upload_url)
      .multipart(form)
      .send()
      .await?;

    let location = response
      .headers()
      .get(LOCATION)
      .and_then(|value| value.to_str().ok())
      .map(str::to_string);

    self.comment_post_outcome(response.status(), location.as_deref())
  }

  // Only a redirect to the comments anchor means the comment was stored.
  fn comment_post_outcome(
    &self,
    status: StatusCode,
    location: Option<&str>,
  ) -> Result {
    if status.is_redirection() {
      let Some(location) = location else {
        bail!("comment was not stored: {status} without a location");
      };

      let target = self.endpoint(location)?;

      if target.path() == "/" && target.fragment() == Some(Self::COMMENTS_ANCHOR)
      {
        return Ok(());
      }

      bail!("comment was not stored: redirected to {location}");
    }

    if !status.is_success() {
      bail!("comment was not stored: {status}");
    }

    Ok(())
  }

  pub(crate) async fn delete_all_comments(&self) -> Result {
    let url = self.endpoint(Self::DELETE_PATH)?;

    tracing::info!(%url, "deleting all comments");

    self.client.post(url).send().await?.error_for_status()?;

    Ok(())
  }

  fn endpoint(&self, path: &str) -> Result<Url> {
    self
      .base_url
      .join(path)
      .with_context(|| format!("invalid endpoint {path} for {}", self.base_url))
  }

  pub(crate) async fn fetch_auth_status(&self) -> Result<AuthStatus> {
    let url = self.endpoint(Self::AUTH_PATH)?;

    let mut status = self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .json::<AuthStatus>()
      .await?;

    status.url = self.endpoint(&status.url)?.to_string();

    Ok(status)
  }

  pub(crate) async fn fetch_comments(
    &self,
    query: &CommentQuery,
  ) -> Result<CommentPage> {
    let url = query.url(&self.base_url)?;

    tracing::info!(%url, "fetching comments");

    let body = self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;

    CommentPage::parse(self.strategy, &body)
      .context("unexpected comments payload")
  }

  async fn fetch_upload_url(&self) -> Result<Url> {
    let url = self.upload_url_request()?;

    let body = self
      .client
      .get(url)
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;

    self.endpoint(body.trim()).context("invalid upload url")
  }

  pub(crate) fn new(
    base_url: Url,
    strategy: PaginationStrategy,
  ) -> Result<Self> {
    let client = reqwest::Client::builder()
      .redirect(redirect::Policy::none())
      .build()
      .context("could not build http client")?;

    Ok(Self {
      base_url,
      client,
      strategy,
    })
  }

  fn upload_url_request(&self) -> Result<Url> {
    let mut url = self.endpoint(Self::UPLOAD_URL_PATH)?;

    url
      .query_pairs_mut()
      .append_pair("forwardurl", &format!("/{COMMENTS_PATH}"));

    Ok(url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoints_resolve_under_base_url() {
    let client = Client::new(
      Url::parse("http://localhost:8080/").unwrap(),
      PaginationStrategy::TimestampBased,
    )
    .unwrap();

    assert_eq!(
      client.endpoint(Client::DELETE_PATH).unwrap().as_str(),
      "http://localhost:8080/delete-data"
    );

    assert_eq!(
      client.endpoint("/_ah/login?continue=%2F").unwrap().as_str(),
      "http://localhost:8080/_ah/login?continue=%2F"
    );

    assert_eq!(
      client.endpoint("https://accounts.example.com/login").unwrap().as_str(),
      "https://accounts.example.com/login"
    );
  }

  #[test]
  fn upload_url_request_forwards_to_comments() {
    let client = Client::new(
      Url::parse("http://localhost:8080/").unwrap(),
      PaginationStrategy::TimestampBased,
    )
    .unwrap();

    assert_eq!(
      client.upload_url_request().unwrap().as_str(),
      "http://localhost:8080/blobstore-upload-url?forwardurl=%2Fcomments"
    );
  }

  #[test]
  fn redirect_to_comments_anchor_means_stored() {
    let client = Client::new(
      Url::parse("http://localhost:8080/").unwrap(),
      PaginationStrategy::TimestampBased,
    )
    .unwrap();

    assert!(
      client
        .comment_post_outcome(StatusCode::FOUND, Some("/#comments"))
        .is_ok()
    );

    assert!(
      client
        .comment_post_outcome(
          StatusCode::SEE_OTHER,
          Some("http://localhost:8080/#comments"),
        )
        .is_ok()
    );
  }

  #[test]
  fn other_redirects_are_errors() {
    let client = Client::new(
      Url::parse("http://localhost:8080/").unwrap(),
      PaginationStrategy::TimestampBased,
    )
    .unwrap();

    let logged_out = client
      .comment_post_outcome(StatusCode::FOUND, Some("/"))
      .unwrap_err();

    assert_eq!(
      logged_out.to_string(),
      "comment was not stored: redirected to /"
    );

    assert!(client.comment_post_outcome(StatusCode::FOUND, None).is_err());

    assert!(
      client
        .comment_post_outcome(StatusCode::FOUND, Some("/login#comments"))
        .is_err()
    );
  }

  #[test]
  fn non_redirect_statuses_follow_success() {
    let client = Client::new(
      Url::parse("http://localhost:8080/").unwrap(),
      PaginationStrategy::TimestampBased,
    )
    .unwrap();

    assert!(client.comment_post_outcome(StatusCode::OK, None).is_ok());

    assert!(
      client
        .comment_post_outcome(StatusCode::INTERNAL_SERVER_ERROR, None)
        .is_err()
    );
  }
}
