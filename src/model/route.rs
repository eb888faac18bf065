//! Screen locations.
//!
//! Screens are addressed with the page locations of the listing site
//! (`landingpage.html?id=3`, `events.html?search=jazz`, ...). Locations are
//! resolved against a fixed base so relative forms like `./index.html` work.

use crate::model::error::RouteError;
use std::fmt;
use url::Url;

const BASE: &str = "https://eventboard.local/";

/// A screen together with its query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `index.html`: featured events and home search.
    Home,
    /// `events.html`: the full listing, optionally pre-searched.
    Events {
        /// Initial search text from `?search=`.
        search: Option<String>,
    },
    /// `landingpage.html`: one event in detail.
    Detail {
        /// Raw `id` parameter, if present.
        id: Option<String>,
    },
    /// `RSVP.html`: the RSVP form for one event.
    Rsvp {
        /// Raw `id` parameter, if present.
        id: Option<String>,
    },
    /// `contact_us.html`: the organizer contact form.
    Contact,
    /// `about-us.html`: static information.
    About,
}

impl Route {
    /// Parse a page location.
    ///
    /// Page names are matched case-insensitively. An empty path is the home
    /// screen. Only the first occurrence of a parameter counts.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Malformed` if the location cannot be resolved and
    /// `RouteError::UnknownPage` if it names no screen.
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let base = Url::parse(BASE).map_err(|e| RouteError::Malformed {
            location: location.to_string(),
            reason: e.to_string(),
        })?;
        let url = base.join(location.trim()).map_err(|e| RouteError::Malformed {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

        let page = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let param = |name: &str| {
            url.query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        match page.as_str() {
            "" | "index.html" => Ok(Route::Home),
            "events.html" => Ok(Route::Events {
                search: param("search"),
            }),
            "landingpage.html" => Ok(Route::Detail { id: param("id") }),
            "rsvp.html" => Ok(Route::Rsvp { id: param("id") }),
            "contact_us.html" => Ok(Route::Contact),
            "about-us.html" => Ok(Route::About),
            _ => Err(RouteError::UnknownPage { page }),
        }
    }

    /// Location string for this route, the inverse of [`Route::parse`].
    pub fn location(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::Events { search: None } => "events.html".to_string(),
            Route::Events {
                search: Some(search),
            } => format!("events.html?search={}", encode(search)),
            Route::Detail { id } => with_id("landingpage.html", id.as_deref()),
            Route::Rsvp { id } => with_id("RSVP.html", id.as_deref()),
            Route::Contact => "contact_us.html".to_string(),
            Route::About => "about-us.html".to_string(),
        }
    }

    /// Short title used in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Events { .. } => "Events",
            Route::Detail { .. } => "Event",
            Route::Rsvp { .. } => "RSVP",
            Route::Contact => "Contact",
            Route::About => "About",
        }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Home
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

fn with_id(page: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{page}?id={}", encode(id)),
        None => page.to_string(),
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_home_variants() {
        assert_eq!(Route::parse("index.html").unwrap(), Route::Home);
        assert_eq!(Route::parse("").unwrap(), Route::Home);
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(Route::parse("./index.html").unwrap(), Route::Home);
    }

    #[test]
    fn parses_detail_id() {
        assert_eq!(
            Route::parse("landingpage.html?id=3").unwrap(),
            Route::Detail {
                id: Some("3".into())
            }
        );
    }

    #[test]
    fn detail_without_id_has_no_selector() {
        assert_eq!(
            Route::parse("landingpage.html").unwrap(),
            Route::Detail { id: None }
        );
    }

    #[test]
    fn page_names_are_case_insensitive() {
        assert_eq!(
            Route::parse("RSVP.html?id=12").unwrap(),
            Route::Rsvp {
                id: Some("12".into())
            }
        );
        assert_eq!(
            Route::parse("rsvp.html?id=12").unwrap(),
            Route::Rsvp {
                id: Some("12".into())
            }
        );
    }

    #[test]
    fn search_parameter_is_decoded() {
        assert_eq!(
            Route::parse("events.html?search=jazz%20night").unwrap(),
            Route::Events {
                search: Some("jazz night".into())
            }
        );
        assert_eq!(
            Route::parse("events.html?search=a+b").unwrap(),
            Route::Events {
                search: Some("a b".into())
            }
        );
    }

    #[test]
    fn first_parameter_wins() {
        assert_eq!(
            Route::parse("landingpage.html?id=1&id=2").unwrap(),
            Route::Detail {
                id: Some("1".into())
            }
        );
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert_eq!(
            Route::parse("pricing.html"),
            Err(RouteError::UnknownPage {
                page: "pricing.html".into()
            })
        );
    }

    #[test]
    fn location_round_trips_through_parse() {
        let routes = [
            Route::Home,
            Route::Events { search: None },
            Route::Events {
                search: Some("live & loud".into()),
            },
            Route::Detail {
                id: Some("4".into()),
            },
            Route::Rsvp { id: None },
            Route::Contact,
            Route::About,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.location()).unwrap(), route);
        }
    }

    #[test]
    fn search_location_is_encoded() {
        let route = Route::Events {
            search: Some("jazz night".into()),
        };
        assert_eq!(route.location(), "events.html?search=jazz+night");
    }
}
