use crate::utils::error::{Result, ScopeError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScopeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A descriptor is looked up by bare file name in each directory.
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Must be a plain file name without directory components".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| ScopeError::MissingConfigError {
            field: field_name.to_string(),
        })
}

/// Splits `owner/repo` as found in `GITHUB_REPOSITORY`.
pub fn parse_repository_slug(field_name: &str, slug: &str) -> Result<(String, String)> {
    let invalid = |reason: &str| ScopeError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: slug.to_string(),
        reason: reason.to_string(),
    };

    let (owner, repo) = slug
        .split_once('/')
        .ok_or_else(|| invalid("Expected the form owner/repo"))?;

    if owner.trim().is_empty() || repo.trim().is_empty() || repo.contains('/') {
        return Err(invalid("Expected the form owner/repo"));
    }

    Ok((owner.to_string(), repo.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_url", "https://api.github.com").is_ok());
        assert!(validate_url("api_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api_url", "").is_err());
        assert!(validate_url("api_url", "invalid-url").is_err());
        assert!(validate_url("api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("descriptor_file", "pom.xml").is_ok());
        assert!(validate_file_name("descriptor_file", "").is_err());
        assert!(validate_file_name("descriptor_file", "sub/pom.xml").is_err());
        assert!(validate_file_name("descriptor_file", "..").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let token: Option<String> = None;
        let err = validate_required_field("github-token", &token).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: github-token"
        );

        let token = Some("abc".to_string());
        assert_eq!(validate_required_field("github-token", &token).unwrap(), "abc");
    }

    #[test]
    fn test_parse_repository_slug() {
        assert_eq!(
            parse_repository_slug("repository", "test-owner/test-repo").unwrap(),
            ("test-owner".to_string(), "test-repo".to_string())
        );
        assert!(parse_repository_slug("repository", "no-slash").is_err());
        assert!(parse_repository_slug("repository", "/repo").is_err());
        assert!(parse_repository_slug("repository", "a/b/c").is_err());
    }
}
