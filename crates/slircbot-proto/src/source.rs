//! Message source helpers.
//!
//! Events carry their origin as `nick!user@host` (or a bare server name).
//! The session layer only ever needs the nickname part.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

/// A borrowed view of a `nick!user@host` source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Source<'a> {
    /// Nickname, or the server name for server-originated messages.
    pub nick: &'a str,
    /// Username (ident), if present.
    pub user: Option<&'a str>,
    /// Hostname, if present.
    pub host: Option<&'a str>,
}

impl<'a> Source<'a> {
    /// Split a source string. This is lenient and never fails: a string with
    /// no `!` or `@` is returned as a bare nick.
    pub fn parse(raw: &'a str) -> Self {
        let (rest, host) = match raw.split_once('@') {
            Some((rest, host)) => (rest, Some(host)),
            None => (raw, None),
        };
        let (nick, user) = match rest.split_once('!') {
            Some((nick, user)) => (nick, Some(user)),
            None => (rest, None),
        };
        Source { nick, user, host }
    }
}

/// Return the nickname portion of a `nick!user@host` source.
#[inline]
pub fn nick_of(source: &str) -> &str {
    Source::parse(source).nick
}
