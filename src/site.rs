//! Static site model: named routes, the navigation sequence, and the clock
//! used for the copyright year.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

/// A named page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing page.
    Home,
    Features,
    About,
    Contact,
    /// The SOAP drafting application. Served elsewhere.
    Soap,
}

impl Route {
    /// URL path of this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Features => "/features",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Soap => "/soap",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Visual treatment of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    Plain,
    /// Outlined pill, used for the application entry point.
    Pill,
}

/// One entry in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub route: Route,
    pub style: NavStyle,
}

/// Header navigation, in display order. The brand link to `/` precedes these.
pub const NAV_ENTRIES: [NavEntry; 4] = [
    NavEntry {
        label: "Features",
        route: Route::Features,
        style: NavStyle::Plain,
    },
    NavEntry {
        label: "About",
        route: Route::About,
        style: NavStyle::Plain,
    },
    NavEntry {
        label: "Contact",
        route: Route::Contact,
        style: NavStyle::Plain,
    },
    NavEntry {
        label: "Try App",
        route: Route::Soap,
        style: NavStyle::Pill,
    },
];

/// Source of the current date.
pub trait Clock: Send + Sync + fmt::Debug {
    fn today(&self) -> NaiveDate;

    /// Calendar year shown in the footer.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stopped at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_entries_are_ordered_and_distinct() {
        let paths: Vec<_> = NAV_ENTRIES.iter().map(|e| e.route.path()).collect();
        assert_eq!(paths, ["/features", "/about", "/contact", "/soap"]);

        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, ["Features", "About", "Contact", "Try App"]);
    }

    #[test]
    fn only_the_app_link_is_a_pill() {
        let pills: Vec<_> = NAV_ENTRIES
            .iter()
            .filter(|e| e.style == NavStyle::Pill)
            .map(|e| e.route)
            .collect();
        assert_eq!(pills, [Route::Soap]);
    }

    #[test]
    fn fixed_clock_reports_its_year() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2031, 12, 31).unwrap());
        assert_eq!(clock.year(), 2031);
    }

    #[test]
    fn system_clock_agrees_with_chrono() {
        let before = Local::now().year();
        let year = SystemClock.year();
        let after = Local::now().year();
        assert!(year == before || year == after);
    }
}
