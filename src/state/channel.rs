//! Per-channel membership and mode state.

use std::collections::HashMap;

use slircbot_proto::CaseMapping;
use tracing::debug;

use super::IrcMap;

/// What the bot knows about one channel it occupies.
///
/// Operator and voice status are kept as member subsets rather than in the
/// mode table. A departing nick is always removed from all three sets at once.
#[derive(Debug, Clone, Default)]
pub struct Channel {
    members: IrcMap<()>,
    operators: IrcMap<()>,
    voiced: IrcMap<()>,
    /// Every other channel mode, keyed by letter.
    modes: HashMap<char, Option<String>>,
}

impl Channel {
    pub fn new() -> Self {
        Self::with_casemapping(CaseMapping::default())
    }

    pub fn with_casemapping(casemapping: CaseMapping) -> Self {
        Self {
            members: IrcMap::with_casemapping(casemapping),
            operators: IrcMap::with_casemapping(casemapping),
            voiced: IrcMap::with_casemapping(casemapping),
            modes: HashMap::new(),
        }
    }

    // === Membership ===

    /// Nicknames present, as last spelled by the server.
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.members.keys()
    }

    /// Nicknames holding channel operator status.
    pub fn opers(&self) -> impl Iterator<Item = &str> {
        self.operators.keys()
    }

    /// Nicknames holding voice.
    pub fn voiced(&self) -> impl Iterator<Item = &str> {
        self.voiced.keys()
    }

    pub fn user_count(&self) -> usize {
        self.members.len()
    }

    pub fn has_user(&self, nick: &str) -> bool {
        self.members.contains_key(nick)
    }

    pub fn is_oper(&self, nick: &str) -> bool {
        self.operators.contains_key(nick)
    }

    pub fn is_voiced(&self, nick: &str) -> bool {
        self.voiced.contains_key(nick)
    }

    /// Add a member. Re-adding an existing member only refreshes its spelling.
    pub fn add_user(&mut self, nick: &str) {
        self.members.insert(nick, ());
    }

    fn ensure_member(&mut self, nick: &str) {
        if !self.has_user(nick) {
            debug!(nick, "status granted to a nick not yet seen");
            self.add_user(nick);
        }
    }

    /// Remove a member together with any status it held. Idempotent.
    pub fn remove_user(&mut self, nick: &str) {
        self.members.remove(nick);
        self.operators.remove(nick);
        self.voiced.remove(nick);
    }

    /// Carry a member and its status over to a new nickname.
    ///
    /// # Panics
    ///
    /// Panics if `before` is not a member; callers check [`has_user`](Self::has_user)
    /// first, so reaching this means the event stream was misread.
    pub fn rename_user(&mut self, before: &str, after: &str) {
        assert!(
            self.has_user(before),
            "rename of {before} to {after} on a channel {before} is not in"
        );

        let was_oper = self.operators.remove(before).is_some();
        let was_voiced = self.voiced.remove(before).is_some();
        self.members.remove(before);

        self.members.insert(after, ());
        if was_oper {
            self.operators.insert(after, ());
        }
        if was_voiced {
            self.voiced.insert(after, ());
        }
    }

    // === Modes ===

    /// Apply `+letter [argument]`.
    ///
    /// `o` and `v` grant status to the nick in `argument`, adding it as a
    /// member if it was not known yet; everything else is stored in the mode
    /// table, replacing any earlier argument.
    pub fn set_mode(&mut self, letter: char, argument: Option<&str>) {
        match (letter, argument) {
            ('o', Some(nick)) => {
                self.ensure_member(nick);
                self.operators.insert(nick, ());
            }
            ('v', Some(nick)) => {
                self.ensure_member(nick);
                self.voiced.insert(nick, ());
            }
            ('o' | 'v', None) => debug!(mode = %letter, "status mode without a target"),
            _ => {
                self.modes.insert(letter, argument.map(str::to_owned));
            }
        }
    }

    /// Apply `-letter [argument]`. Clearing something that is not set is a no-op.
    pub fn clear_mode(&mut self, letter: char, argument: Option<&str>) {
        match (letter, argument) {
            ('o', Some(nick)) => {
                self.operators.remove(nick);
            }
            ('v', Some(nick)) => {
                self.voiced.remove(nick);
            }
            ('o' | 'v', None) => {}
            _ => {
                self.modes.remove(&letter);
            }
        }
    }

    pub fn has_mode(&self, letter: char) -> bool {
        self.modes.contains_key(&letter)
    }

    /// Stored `(letter, argument)` pairs for modes other than `o`/`v`.
    pub fn modes(&self) -> impl Iterator<Item = (char, Option<&str>)> {
        self.modes.iter().map(|(c, arg)| (*c, arg.as_deref()))
    }

    fn mode_argument(&self, letter: char) -> Option<&str> {
        self.modes.get(&letter).and_then(|arg| arg.as_deref())
    }

    /// `+m`
    pub fn is_moderated(&self) -> bool {
        self.has_mode('m')
    }

    /// `+s`
    pub fn is_secret(&self) -> bool {
        self.has_mode('s')
    }

    /// `+p`
    pub fn is_protected(&self) -> bool {
        self.has_mode('p')
    }

    /// `+t`
    pub fn has_topic_lock(&self) -> bool {
        self.has_mode('t')
    }

    /// `+i`
    pub fn is_invite_only(&self) -> bool {
        self.has_mode('i')
    }

    /// `+n`
    pub fn disallows_external_messages(&self) -> bool {
        self.has_mode('n')
    }

    /// `+l`
    pub fn has_limit(&self) -> bool {
        self.has_mode('l')
    }

    /// The user limit as sent by the server, if `+l` is set.
    pub fn limit(&self) -> Option<&str> {
        self.mode_argument('l')
    }

    /// `+k`
    pub fn has_key(&self) -> bool {
        self.has_mode('k')
    }

    /// The channel key, if `+k` is set.
    pub fn key(&self) -> Option<&str> {
        self.mode_argument('k')
    }
}
