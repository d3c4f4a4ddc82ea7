//! Client-side route table.
//!
//! Every page of the console has one `AppRoute` variant. `parse` and
//! `to_path` are exact inverses for every route, so links built with
//! `to_path` always land on the page they name.

/// A resolved client route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Overview,
    Login,
    Compliance,
    Benchmark {
        benchmark_id: String,
    },
    BenchmarkControl {
        benchmark_id: String,
        control_id: String,
    },
    Controls,
    Integrations,
    IntegrationType {
        integration_type: String,
    },
    Tasks,
    Task {
        id: String,
    },
    Widgets,
    Queries,
    Views,
    Migration,
    NotFound,
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment)
        .ok()
        .map(|s| s.into_owned())
        .filter(|s| !s.is_empty())
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

impl AppRoute {
    /// Resolve a location path. Query string and fragment are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let raw: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let segments: Option<Vec<String>> = raw.iter().map(|s| decode(s)).collect();
        let Some(segments) = segments else {
            return AppRoute::NotFound;
        };
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        match segments.as_slice() {
            [] => AppRoute::Overview,
            ["login"] => AppRoute::Login,
            ["compliance"] => AppRoute::Compliance,
            ["compliance", benchmark_id] => AppRoute::Benchmark {
                benchmark_id: benchmark_id.to_string(),
            },
            ["compliance", benchmark_id, control_id] => AppRoute::BenchmarkControl {
                benchmark_id: benchmark_id.to_string(),
                control_id: control_id.to_string(),
            },
            ["controls"] => AppRoute::Controls,
            ["integrations"] => AppRoute::Integrations,
            ["integrations", integration_type] => AppRoute::IntegrationType {
                integration_type: integration_type.to_string(),
            },
            ["tasks"] => AppRoute::Tasks,
            ["tasks", id] => AppRoute::Task { id: id.to_string() },
            ["widgets"] => AppRoute::Widgets,
            ["queries"] => AppRoute::Queries,
            ["views"] => AppRoute::Views,
            ["migration"] => AppRoute::Migration,
            _ => AppRoute::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Overview => "/".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Compliance => "/compliance".to_string(),
            AppRoute::Benchmark { benchmark_id } => {
                format!("/compliance/{}", encode(benchmark_id))
            }
            AppRoute::BenchmarkControl {
                benchmark_id,
                control_id,
            } => format!("/compliance/{}/{}", encode(benchmark_id), encode(control_id)),
            AppRoute::Controls => "/controls".to_string(),
            AppRoute::Integrations => "/integrations".to_string(),
            AppRoute::IntegrationType { integration_type } => {
                format!("/integrations/{}", encode(integration_type))
            }
            AppRoute::Tasks => "/tasks".to_string(),
            AppRoute::Task { id } => format!("/tasks/{}", encode(id)),
            AppRoute::Widgets => "/widgets".to_string(),
            AppRoute::Queries => "/queries".to_string(),
            AppRoute::Views => "/views".to_string(),
            AppRoute::Migration => "/migration".to_string(),
            AppRoute::NotFound => "/404".to_string(),
        }
    }

    /// Every route except the login page needs a session
    pub fn requires_auth(&self) -> bool {
        !matches!(self, AppRoute::Login)
    }

    /// Title shown in the top header
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Overview => "Overview",
            AppRoute::Login => "Sign in",
            AppRoute::Compliance | AppRoute::Benchmark { .. } => "Compliance",
            AppRoute::BenchmarkControl { .. } | AppRoute::Controls => "Controls",
            AppRoute::Integrations | AppRoute::IntegrationType { .. } => "Integrations",
            AppRoute::Tasks | AppRoute::Task { .. } => "Tasks",
            AppRoute::Widgets => "Widgets",
            AppRoute::Queries => "Queries",
            AppRoute::Views => "Views",
            AppRoute::Migration => "Sample data",
            AppRoute::NotFound => "Not found",
        }
    }

    /// Sidebar section the route belongs to
    pub fn section(&self) -> AppRoute {
        match self {
            AppRoute::Benchmark { .. } | AppRoute::BenchmarkControl { .. } => AppRoute::Compliance,
            AppRoute::IntegrationType { .. } => AppRoute::Integrations,
            AppRoute::Task { .. } => AppRoute::Tasks,
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<AppRoute> {
        vec![
            AppRoute::Overview,
            AppRoute::Login,
            AppRoute::Compliance,
            AppRoute::Benchmark {
                benchmark_id: "aws_cis_v140".into(),
            },
            AppRoute::BenchmarkControl {
                benchmark_id: "aws_cis_v140".into(),
                control_id: "aws_cis_v140_1_4".into(),
            },
            AppRoute::Controls,
            AppRoute::Integrations,
            AppRoute::IntegrationType {
                integration_type: "aws_cloud_account".into(),
            },
            AppRoute::Tasks,
            AppRoute::Task { id: "42".into() },
            AppRoute::Widgets,
            AppRoute::Queries,
            AppRoute::Views,
            AppRoute::Migration,
        ]
    }

    #[test]
    fn test_parse_format_round_trip() {
        for route in all_routes() {
            assert_eq!(AppRoute::parse(&route.to_path()), route, "{}", route.to_path());
        }
    }

    #[test]
    fn test_ids_with_reserved_characters_round_trip() {
        let route = AppRoute::Benchmark {
            benchmark_id: "team/a b".into(),
        };
        assert_eq!(route.to_path(), "/compliance/team%2Fa%20b");
        assert_eq!(AppRoute::parse(&route.to_path()), route);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(AppRoute::parse("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/tasks/1/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/compliance/a/b/c"), AppRoute::NotFound);
    }

    #[test]
    fn test_query_and_trailing_slash_are_ignored() {
        assert_eq!(AppRoute::parse(""), AppRoute::Overview);
        assert_eq!(AppRoute::parse("/controls/"), AppRoute::Controls);
        assert_eq!(
            AppRoute::parse("/tasks/7?tab=runs#top"),
            AppRoute::Task { id: "7".into() }
        );
    }

    #[test]
    fn test_only_login_is_public() {
        for route in all_routes() {
            assert_eq!(route.requires_auth(), route != AppRoute::Login);
        }
        assert!(AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn test_detail_routes_highlight_their_section() {
        assert_eq!(
            AppRoute::parse("/compliance/x/y").section(),
            AppRoute::Compliance
        );
        assert_eq!(AppRoute::parse("/tasks/1").section(), AppRoute::Tasks);
        assert_eq!(AppRoute::Widgets.section(), AppRoute::Widgets);
    }
}
