use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Display,
    hash::Hash,
    sync::{Arc, PoisonError, RwLock},
};

use arc_swap::{ArcSwap, Guard};
use tracing::{debug, warn};

use super::{
    super::{core::UserId, Error, Result},
    GameState, Terminal, TryOutcome,
};

type Slot = Arc<ArcSwap<GameState>>;

/// Live games, keyed by whatever handle the host uses (a message, a thread...).
///
/// Cloning is cheap and clones share the same games. Each game sits in its own
/// [`ArcSwap`], so readers never block writers, and [`GameRegistry::submit`]
/// retries its read-modify-write until it lands on an unchanged game.
#[derive(Debug)]
pub struct GameRegistry<H = String>(Arc<RwLock<HashMap<H, Slot>>>);

impl<H> Clone for GameRegistry<H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<H> Default for GameRegistry<H> {
    fn default() -> Self {
        Self(Arc::new(RwLock::new(HashMap::new())))
    }
}

impl<H> GameRegistry<H>
where
    H: Eq + Hash + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, handle: &H) -> Result<Slot> {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .get(handle)
            .cloned()
            .ok_or_else(|| Error::not_found(handle))
    }

    /// Stores a new game, refusing if `handle` already has one.
    pub fn create(&self, handle: H, game: GameState) -> Result<Arc<GameState>> {
        let arc = Arc::new(game);
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);

        match guard.entry(handle) {
            Entry::Occupied(entry) => Err(Error::handle_in_use(entry.key())),
            Entry::Vacant(entry) => {
                debug!(handle = %entry.key(), "game created");
                entry.insert(Arc::new(ArcSwap::new(arc.clone())));
                Ok(arc)
            }
        }
    }

    /// Stores `game` under `handle`, returning whatever game it replaced.
    pub fn replace(&self, handle: H, game: GameState) -> Option<Arc<GameState>> {
        let arc = Arc::new(game);
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);

        match guard.entry(handle) {
            Entry::Occupied(entry) => {
                warn!(handle = %entry.key(), "replacing a running game");
                Some(entry.get().swap(arc))
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(ArcSwap::new(arc)));
                None
            }
        }
    }

    pub fn get(&self, handle: &H) -> Result<Arc<GameState>> {
        self.slot(handle).map(|arc_swap| arc_swap.load_full())
    }

    pub fn contains(&self, handle: &H) -> bool {
        let guard = self.0.read().unwrap_or_else(PoisonError::into_inner);
        guard.contains_key(handle)
    }

    /// Forgets the game at `handle`. Does nothing if there is none.
    pub fn remove(&self, handle: &H) -> Option<Arc<GameState>> {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        let removed = guard.remove(handle).map(|arc_swap| arc_swap.load_full());

        if removed.is_some() {
            debug!(%handle, "game removed");
        }

        removed
    }

    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn update<T>(
        &self,
        handle: &H,
        f: impl Fn(&GameState) -> Result<(T, GameState)>,
    ) -> Result<(T, Arc<GameState>)> {
        let arc_swap = self.slot(handle)?;
        let mut current = arc_swap.load_full();

        loop {
            let (value, next) = f(&current)?;
            let next = Arc::new(next);

            let previous = arc_swap.compare_and_swap(&current, next.clone());
            if Arc::ptr_eq(&previous, &current) {
                return Ok((value, next));
            }

            debug!(%handle, "game changed underneath, retrying");
            current = Guard::into_inner(previous);
        }
    }

    /// Submits an attempt to the game at `handle`.
    ///
    /// The game is only replaced if nobody else changed it in the meantime;
    /// on error, the stored game is untouched.
    pub fn submit(
        &self,
        handle: &H,
        guess: &str,
        submitter: &UserId,
    ) -> Result<(TryOutcome, Arc<GameState>)> {
        self.update(handle, |game| game.submit_attempt(guess, submitter.clone()))
    }

    /// Forces the game at `handle` to end.
    pub fn end(&self, handle: &H, ending: Terminal) -> Result<Arc<GameState>> {
        self.update(handle, |game| Ok(((), game.end_game(ending))))
            .map(|((), game)| game)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::GameRegistry;
    use crate::games::wordle::{
        core::UserId,
        game::{GameState, Status, Terminal, TryOutcome},
        Error, MAX_ATTEMPTS,
    };

    fn game(target: &str) -> GameState {
        GameState::new(target, "u1").expect("not empty")
    }

    #[test]
    #[traced_test]
    fn create_get_remove() {
        let registry = GameRegistry::new();
        let game_a = game("chat");

        registry
            .create("msg1".to_owned(), game_a.clone())
            .expect("free handle");
        assert_eq!(*registry.get(&"msg1".to_owned()).expect("created"), game_a);

        registry.remove(&"msg1".to_owned());
        assert_eq!(
            registry.get(&"msg1".to_owned()),
            Err(Error::not_found("msg1"))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn removing_twice_is_fine() {
        let registry = GameRegistry::<String>::new();
        assert!(registry.remove(&"nothing".to_owned()).is_none());
    }

    #[test]
    fn create_refuses_occupied_handles() {
        let registry = GameRegistry::new();
        registry.create("msg1", game("chat")).expect("free handle");

        assert_eq!(
            registry.create("msg1", game("chien")),
            Err(Error::handle_in_use("msg1"))
        );
        assert_eq!(registry.get(&"msg1").expect("created").target().to_string(), "CHAT");
    }

    #[test]
    #[traced_test]
    fn replace_overwrites() {
        let registry = GameRegistry::new();
        assert!(registry.replace("msg1", game("chat")).is_none());

        let previous = registry.replace("msg1", game("chien")).expect("was there");
        assert_eq!(previous.target().to_string(), "CHAT");
        assert_eq!(registry.get(&"msg1").expect("replaced").target().to_string(), "CHIEN");
        assert!(logs_contain("replacing a running game"));
    }

    #[test]
    #[traced_test]
    fn submit_through_the_registry() {
        let registry = GameRegistry::new();
        registry.create("msg1", game("chat")).expect("free handle");
        let user = UserId::from("u2");

        let error = registry.submit(&"msg1", "chien", &user).expect_err("too long");
        assert!(matches!(error, Error::LengthMismatch(..)));
        assert!(registry.get(&"msg1").expect("there").attempts().is_empty());

        let (outcome, stored) = registry.submit(&"msg1", "plat", &user).expect("valid");
        assert_eq!(outcome, TryOutcome::Continue);
        assert_eq!(stored.attempts().len(), 1);

        let (outcome, stored) = registry.submit(&"msg1", "chat", &user).expect("valid");
        assert_eq!(outcome, TryOutcome::Win);
        assert_eq!(registry.get(&"msg1").expect("there"), stored);

        assert_eq!(
            registry.submit(&"msg1", "chat", &user),
            Err(Error::already_over(Status::Won))
        );
        assert_eq!(
            registry.submit(&"nope", "chat", &user),
            Err(Error::not_found("nope"))
        );
    }

    #[test]
    fn end_through_the_registry() {
        let registry = GameRegistry::new();
        registry.create(7u64, game("chat")).expect("free handle");

        let ended = registry.end(&7, Terminal::Lost).expect("there");
        assert_eq!(ended.status(), Status::Lost);
        assert_eq!(registry.get(&7).expect("there").status(), Status::Lost);
    }

    #[test]
    fn concurrent_submissions_are_all_counted() {
        let registry = GameRegistry::new();
        registry.create("msg1", game("chat")).expect("free handle");

        let handles = (0..MAX_ATTEMPTS)
            .map(|n| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry
                        .submit(&"msg1", "plat", &UserId::new(format!("u{n}")))
                        .map(|(outcome, _)| outcome)
                })
            })
            .collect::<Vec<_>>();

        let outcomes = handles
            .into_iter()
            .map(|handle| handle.join().expect("no panic"))
            .collect::<Vec<_>>();

        assert!(outcomes.iter().all(Result::is_ok));
        assert_eq!(
            outcomes
                .iter()
                .filter(|outcome| **outcome == Ok(TryOutcome::Lose))
                .count(),
            1
        );

        let stored = registry.get(&"msg1").expect("there");
        assert_eq!(stored.attempts().len(), MAX_ATTEMPTS);
        assert_eq!(stored.status(), Status::Lost);
    }
}
