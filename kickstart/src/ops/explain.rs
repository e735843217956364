//! Explain operation - feature details and render order.

use kickstart_features::{APPLICATION, BuildSystem, Result, registry};

use crate::reports::ExplainReport;

/// Describe a feature and everything rendering it pulls in.
pub fn explain(id: &str, build_system: BuildSystem) -> Result<ExplainReport> {
    let ordered = registry().resolve(&[id])?;
    // A lone selection renders after all of its prerequisites.
    let feature = ordered[ordered.len() - 1];
    let render_order: Vec<String> = ordered.iter().map(|f| f.id.to_string()).collect();
    let base = [build_system.feature_id(), APPLICATION]
        .into_iter()
        .filter(|base| !render_order.iter().any(|id| id == base))
        .map(str::to_string)
        .collect();
    let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    Ok(ExplainReport {
        id: feature.id.to_string(),
        title: feature.title.to_string(),
        description: feature.description.to_string(),
        documentation: feature.documentation.to_string(),
        group: feature.group.to_string(),
        requires: strings(feature.prerequisites),
        artifacts: strings(feature.artifacts),
        repositories: strings(feature.repos),
        render_order,
        base,
    })
}

#[cfg(test)]
mod tests {
    use kickstart_features::Error;

    use super::*;

    #[test]
    fn test_explain_prerequisites() {
        let report = explain("auth-basic", BuildSystem::Gradle).unwrap();
        assert_eq!(report.requires, ["auth", "routing"]);
        assert_eq!(report.render_order, ["routing", "auth", "auth-basic"]);
        assert_eq!(report.base, ["build-gradle", APPLICATION]);
        assert_eq!(report.artifacts, ["io.ktor:ktor-auth:$ktor_version"]);
    }

    #[test]
    fn test_explain_base_feature() {
        let report = explain(APPLICATION, BuildSystem::GradleKts).unwrap();
        assert_eq!(report.group, "internal");
        assert_eq!(report.render_order, [APPLICATION]);
        assert_eq!(report.base, ["build-gradle-kts"]);
    }

    #[test]
    fn test_explain_unknown() {
        let err = explain("graphql", BuildSystem::Gradle).unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }
}
