//! Configuration validation.
//!
//! Turns raw CLI arguments into a fully valid [`BuildConfig`] or a list of
//! human-readable problems. Every rule is evaluated (no short-circuiting) so
//! the operator sees all problems in one pass. Validation performs no I/O:
//! paths are checked for presence here, for existence later by the
//! components that read them.

use crate::cli::Args;
use crate::config::{BuildConfig, BuildType, ContentSource, PackageType};

/// Validates parsed arguments and builds the immutable configuration.
///
/// Returns every validation problem found, not just the first one.
pub fn validate(args: &Args) -> std::result::Result<BuildConfig, Vec<String>> {
    let mut problems = Vec::new();

    let package_type = match args.package_type.parse::<PackageType>() {
        Ok(t) => Some(t),
        Err(e) => {
            problems.push(e);
            None
        }
    };

    let build_type = match args.build_type.parse::<BuildType>() {
        Ok(t) => Some(t),
        Err(e) => {
            problems.push(e);
            None
        }
    };

    let is_mpk = package_type == Some(PackageType::Mpk);
    if is_mpk && args.app_name.is_none() {
        problems.push("missing appName (required for mpk)".to_string());
    }
    if is_mpk && args.package_name.is_none() {
        problems.push("missing packageName (required for mpk)".to_string());
    }

    let content = match (&args.content_url, &args.content_dir) {
        (Some(url), None) => Some(ContentSource::Url(url.clone())),
        (None, Some(dir)) => Some(ContentSource::Dir(dir.clone())),
        (Some(_), Some(_)) => {
            problems.push("cannot use both contentUrl and contentDir".to_string());
            None
        }
        (None, None) => {
            problems.push("missing contentUrl or contentDir".to_string());
            None
        }
    };

    if args.output.is_none() {
        problems.push("missing output".to_string());
    }

    if is_mpk && args.cert.is_none() {
        problems.push("missing cert (required for mpk)".to_string());
    }
    if is_mpk && args.privkey.is_none() {
        problems.push("missing privkey (required for mpk)".to_string());
    }

    match (package_type, build_type, content, args.output.clone()) {
        (Some(package_type), Some(build_type), Some(content), Some(output_path))
            if problems.is_empty() =>
        {
            Ok(BuildConfig {
                package_type,
                app_name: args.app_name.clone(),
                package_name: args.package_name.clone(),
                build_type,
                content,
                output_path,
                model_path: args.model.clone(),
                portal_path: args.portal.clone(),
                cert_path: args.cert.clone(),
                privkey_path: args.privkey.clone(),
            })
        }
        _ => Err(problems),
    }
}
