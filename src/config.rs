use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) default_max_comments: usize,
  pub(crate) error_timeout_secs: u64,
  pub(crate) feedback_millis: u64,
  pub(crate) max_comments_cap: usize,
  pub(crate) pagination: PaginationStrategy,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:8080".to_string(),
      default_max_comments: 3,
      error_timeout_secs: 5,
      feedback_millis: 1000,
      max_comments_cap: 10,
      pagination: PaginationStrategy::default(),
    }
  }
}

impl Config {
  pub(crate) fn base_url(&self) -> Result<Url> {
    let mut url = Url::parse(&self.base_url)
      .with_context(|| format!("invalid base url `{}`", self.base_url))?;

    if !url.path().ends_with('/') {
      let path = format!("{}/", url.path());
      url.set_path(&path);
    }

    Ok(url)
  }

  fn config_path() -> PathBuf {
    if let Ok(path) = env::var("FOLIO_CONFIG") {
      return PathBuf::from(path);
    }

    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("folio")
      .join("config.toml")
  }

  pub(crate) fn error_timeout(&self) -> Duration {
    Duration::from_secs(self.error_timeout_secs)
  }

  pub(crate) fn feedback_duration(&self) -> Duration {
    Duration::from_millis(self.feedback_millis)
  }

  pub(crate) fn load() -> Result<Self> {
    let mut config = Self::load_from(&Self::config_path())?;

    if let Ok(base_url) = env::var("FOLIO_BASE_URL") {
      config.base_url = base_url;
    }

    Ok(config)
  }

  pub(crate) fn load_from(path: &Path) -> Result<Self> {
    if !path.exists() {
      return Ok(Self::default());
    }

    let contents = fs::read_to_string(path)
      .with_context(|| format!("failed to read config from {}", path.display()))?;

    let config = toml::from_str::<Self>(&contents)
      .with_context(|| format!("failed to parse config {}", path.display()))?;

    if config.default_max_comments > config.max_comments_cap {
      bail!(
        "default_max_comments ({}) exceeds max_comments_cap ({})",
        config.default_max_comments,
        config.max_comments_cap
      );
    }

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    std::sync::atomic::{AtomicUsize, Ordering},
  };

  static COUNTER: AtomicUsize = AtomicUsize::new(0);

  fn write_temp_config(contents: &str) -> PathBuf {
    let unique = COUNTER.fetch_add(1, Ordering::Relaxed);

    let path = env::temp_dir().join(format!(
      "folio_config_test_{}_{unique}.toml",
      process::id()
    ));

    fs::write(&path, contents).unwrap();

    path
  }

  #[test]
  fn missing_file_yields_defaults() {
    let path = env::temp_dir().join("folio_config_test_does_not_exist.toml");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
  }

  #[test]
  fn partial_file_keeps_remaining_defaults() {
    let path = write_temp_config(
      "base_url = \"https://portfolio.example.com\"\npagination = \"cursor\"\n",
    );

    let config = Config::load_from(&path).unwrap();

    let _ = fs::remove_file(&path);

    assert_eq!(config.pagination, PaginationStrategy::CursorBased);
    assert_eq!(config.default_max_comments, 3);
    assert_eq!(config.max_comments_cap, 10);
    assert_eq!(
      config.base_url().unwrap().as_str(),
      "https://portfolio.example.com/"
    );
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let path = write_temp_config("maxcomments = 4\n");

    let result = Config::load_from(&path);

    let _ = fs::remove_file(&path);

    assert!(result.is_err());
  }

  #[test]
  fn default_above_cap_is_rejected() {
    let path =
      write_temp_config("default_max_comments = 12\nmax_comments_cap = 10\n");

    let error = Config::load_from(&path).unwrap_err();

    let _ = fs::remove_file(&path);

    assert!(error.to_string().contains("exceeds max_comments_cap"));
  }

  #[test]
  fn base_url_gains_trailing_slash() {
    let config = Config {
      base_url: "http://localhost:8080/portfolio".to_string(),
      ..Config::default()
    };

    assert_eq!(
      config.base_url().unwrap().as_str(),
      "http://localhost:8080/portfolio/"
    );
  }

  #[test]
  fn durations_follow_settings() {
    let config = Config::default();

    assert_eq!(config.error_timeout(), Duration::from_secs(5));
    assert_eq!(config.feedback_duration(), Duration::from_secs(1));
  }
}
