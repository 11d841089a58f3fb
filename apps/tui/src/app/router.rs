use std::borrow::Cow;

const HISTORY_LIMIT: usize = 50;

/// The screens reachable by path. Anything unknown lands on `NotFound`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    News,
    Video,
    NotFound(String),
}

/// Header links, in display order.
pub const NAV_LINKS: [(&str, &str); 3] = [("Home", "/"), ("News", "/news"), ("Video", "/video")];

impl Route {
    /// Maps a path to a route. Surrounding whitespace and slashes are
    /// ignored, so `news`, `/news` and `/news/` are the same place.
    /// Matching ignores ASCII case; `/News` opens the article.
    pub fn resolve(path: &str) -> Self {
        let segment = path.trim().trim_matches('/');
        if segment.is_empty() {
            Self::Home
        } else if segment.eq_ignore_ascii_case("news") {
            Self::News
        } else if segment.eq_ignore_ascii_case("video") {
            Self::Video
        } else {
            Self::NotFound(format!("/{segment}"))
        }
    }

    pub fn path(&self) -> Cow<'_, str> {
        match self {
            Self::Home => Cow::Borrowed("/"),
            Self::News => Cow::Borrowed("/news"),
            Self::Video => Cow::Borrowed("/video"),
            Self::NotFound(path) => Cow::Borrowed(path.as_str()),
        }
    }

    /// Whether the screen sits behind the sign-in gate.
    pub const fn is_gated(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }

    /// Index into [`NAV_LINKS`] when the route has a header link.
    pub const fn nav_index(&self) -> Option<usize> {
        match self {
            Self::Home => Some(0),
            Self::News => Some(1),
            Self::Video => Some(2),
            Self::NotFound(_) => None,
        }
    }
}

/// In-process navigation with a back stack. Switching routes only swaps the
/// content area; the header and session survive.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(start_path: &str) -> Self {
        Self {
            current: Route::resolve(start_path),
            history: Vec::new(),
        }
    }

    pub const fn current(&self) -> &Route {
        &self.current
    }

    /// Moves to `path`. Returns false when it resolves to the current route.
    pub fn navigate(&mut self, path: &str) -> bool {
        let next = Route::resolve(path);
        if next == self.current {
            return false;
        }

        log::debug!("navigate {} -> {}", self.current.path(), next.path());
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        true
    }

    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_the_four_patterns() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("news"), Route::News);
        assert_eq!(Route::resolve(" /news/ "), Route::News);
        assert_eq!(Route::resolve("/video"), Route::Video);
        assert_eq!(Route::resolve("/News"), Route::News);
        assert_eq!(Route::resolve("/VIDEO/"), Route::Video);
        assert_eq!(
            Route::resolve("/news/42"),
            Route::NotFound("/news/42".to_string())
        );
        assert_eq!(
            Route::resolve("admin"),
            Route::NotFound("/admin".to_string())
        );
    }

    #[test]
    fn only_not_found_is_ungated() {
        assert!(Route::Home.is_gated());
        assert!(Route::News.is_gated());
        assert!(Route::Video.is_gated());
        assert!(!Route::NotFound("/x".to_string()).is_gated());
    }

    #[test]
    fn navigation_keeps_a_back_stack() {
        let mut router = Router::new("/");
        assert!(!router.can_go_back());

        assert!(router.navigate("/news"));
        assert!(router.navigate("/nowhere"));
        assert!(!router.navigate("nowhere/"));
        assert_eq!(router.current().path(), "/nowhere");

        assert!(router.back());
        assert_eq!(router.current(), &Route::News);
        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
    }
}
