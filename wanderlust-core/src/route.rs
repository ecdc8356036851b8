//! Path-based routing surface shared by the TUI and the CLI.

use std::fmt;

use crate::domain::DestinationId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Destinations,
    DestinationDetail(DestinationId),
    /// `/itinerary?destination=<id>`
    Itinerary { destination: Option<DestinationId> },
    Accommodations,
    BudgetCalculator,
    /// Catch-all; keeps the path that failed to resolve.
    NotFound(String),
}

impl Route {
    /// Resolve a path. Never fails: anything unrecognized is `NotFound`.
    pub fn parse(input: &str) -> Route {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (input, None),
        };
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] if path.starts_with('/') || path.is_empty() => Route::Home,
            ["destinations"] => Route::Destinations,
            ["destinations", id] => Route::DestinationDetail(DestinationId::from(*id)),
            ["itinerary"] => Route::Itinerary {
                destination: query
                    .and_then(|q| query_param(q, "destination"))
                    .filter(|v| !v.is_empty())
                    .map(DestinationId::from),
            },
            ["accommodations"] => Route::Accommodations,
            ["budget-calculator"] => Route::BudgetCalculator,
            _ => Route::NotFound(input.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Destinations => "/destinations".to_string(),
            Route::DestinationDetail(id) => format!("/destinations/{id}"),
            Route::Itinerary { destination: None } => "/itinerary".to_string(),
            Route::Itinerary {
                destination: Some(id),
            } => format!("/itinerary?destination={id}"),
            Route::Accommodations => "/accommodations".to_string(),
            Route::BudgetCalculator => "/budget-calculator".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Page title used in headers and the CLI.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Destinations => "Destinations",
            Route::DestinationDetail(_) => "Destination",
            Route::Itinerary { .. } => "Itinerary Planner",
            Route::Accommodations => "Accommodations",
            Route::BudgetCalculator => "Budget Calculator",
            Route::NotFound(_) => "Page Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query.split('&').find_map(|pair| match pair.split_once('=') {
        Some((k, v)) if k == key => Some(v),
        None if pair == key => Some(""),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/destinations"), Route::Destinations);
        assert_eq!(Route::parse("/destinations/"), Route::Destinations);
        assert_eq!(
            Route::parse("/destinations/bali"),
            Route::DestinationDetail("bali".into())
        );
        assert_eq!(Route::parse("/accommodations"), Route::Accommodations);
        assert_eq!(Route::parse("/budget-calculator"), Route::BudgetCalculator);
    }

    #[test]
    fn itinerary_query() {
        assert_eq!(
            Route::parse("/itinerary"),
            Route::Itinerary { destination: None }
        );
        assert_eq!(
            Route::parse("/itinerary?destination=kyoto"),
            Route::Itinerary {
                destination: Some("kyoto".into())
            }
        );
        assert_eq!(
            Route::parse("/itinerary?foo=1&destination=rome"),
            Route::Itinerary {
                destination: Some("rome".into())
            }
        );
        assert_eq!(
            Route::parse("/itinerary?destination="),
            Route::Itinerary { destination: None }
        );
    }

    #[test]
    fn unknown_is_not_found() {
        assert_eq!(
            Route::parse("/nowhere"),
            Route::NotFound("/nowhere".into())
        );
        assert!(matches!(
            Route::parse("/destinations/bali/extra"),
            Route::NotFound(_)
        ));
        assert!(matches!(Route::parse("budget"), Route::NotFound(_)));
    }

    #[test]
    fn path_renders_back() {
        for p in [
            "/",
            "/destinations",
            "/destinations/paris",
            "/itinerary",
            "/itinerary?destination=bali",
            "/accommodations",
            "/budget-calculator",
            "/missing",
        ] {
            assert_eq!(Route::parse(p).path(), p);
        }
    }
}
