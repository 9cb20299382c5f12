//! Glue tying configuration, the resource store, fetch tasks, and the
//! terminal UI together.
//!
//! The event loop multiplexes two sources with `tokio::select!`: completed
//! network calls arriving on the fetcher channel, and keyboard input polled
//! on a fixed frame interval. All state mutation happens here, on the single
//! UI task, in response to one of those two sources.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time;

use maester_api::ApiClient;
use maester_core::{Category, ResolverCache, ResourceStore, collection_rows, columns};

use crate::config::CliConfig;
use crate::input::{self, Command, InputContext};
use crate::net::{Fetcher, NetEvent, PageData};
use crate::presentation::{terminal, ui};
use crate::state::{AppMode, AppState};

const FRAME_INTERVAL_MS: u64 = 16;
const NET_EVENT_BUFFER: usize = 32;

/// Outcome of one input tick.
enum Tick {
    Idle,
    Redraw,
    Quit,
}

pub struct App {
    store: ResourceStore,
    resolver: ResolverCache,
    state: AppState,
    fetcher: Fetcher,
    rx: mpsc::Receiver<NetEvent>,
}

impl App {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let (tx, rx) = mpsc::channel(NET_EVENT_BUFFER);

        Ok(Self {
            store: ResourceStore::new(),
            resolver: ResolverCache::new(),
            state: AppState::new(),
            fetcher: Fetcher::new(api, tx),
            rx,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("terminal client starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        // Initial fetch: default category, page 0.
        self.request_page();
        self.render(&mut terminal)?;

        loop {
            tokio::select! {
                Some(event) = self.rx.recv() => {
                    self.on_net_event(event);
                    self.render(&mut terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    match self.handle_input_tick()? {
                        Tick::Quit => break,
                        Tick::Redraw => self.render(&mut terminal)?,
                        Tick::Idle => {}
                    }
                }
            }
        }

        terminal::restore()?;
        tracing::info!("terminal client exiting");

        Ok(())
    }

    fn handle_input_tick(&mut self) -> Result<Tick> {
        if !event::poll(Duration::ZERO)? {
            return Ok(Tick::Idle);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctx = InputContext {
                    editing_filter: self.state.editing_filter,
                    in_profile: self.state.in_profile(),
                };
                Ok(self.apply(input::map_key(key, ctx)))
            }
            Event::Resize(_, _) => Ok(Tick::Redraw),
            _ => Ok(Tick::Idle),
        }
    }

    fn apply(&mut self, command: Command) -> Tick {
        match command {
            Command::None => Tick::Idle,
            Command::Quit => Tick::Quit,
            Command::SelectCategory(category) => {
                if self.state.select_category(category) {
                    self.request_page();
                }
                Tick::Redraw
            }
            Command::NextPage => {
                self.state.page.advance();
                self.request_page();
                Tick::Redraw
            }
            Command::PrevPage => {
                if self.state.page.retreat() {
                    self.request_page();
                }
                Tick::Redraw
            }
            Command::RowUp => {
                self.state.selected_row = self.state.selected_row.saturating_sub(1);
                Tick::Redraw
            }
            Command::RowDown => {
                let floor = self.visible_row_count().saturating_sub(1);
                self.state.selected_row = (self.state.selected_row + 1).min(floor);
                Tick::Redraw
            }
            Command::NextColumn => {
                self.state.next_column();
                Tick::Redraw
            }
            Command::ToggleSort => {
                let column = self.state.active_column;
                self.state.view.toggle_sort(column);
                Tick::Redraw
            }
            Command::BeginFilter => {
                self.state.editing_filter = true;
                Tick::Redraw
            }
            Command::FilterChar(ch) => {
                let column = self.state.active_column;
                self.state.view.push_filter_char(column, ch);
                self.clamp_selection();
                Tick::Redraw
            }
            Command::FilterBackspace => {
                let column = self.state.active_column;
                self.state.view.pop_filter_char(column);
                self.clamp_selection();
                Tick::Redraw
            }
            Command::EndFilter => {
                self.state.editing_filter = false;
                Tick::Redraw
            }
            Command::OpenProfile => self.open_profile(),
            Command::CloseProfile => {
                self.state.close_profile();
                Tick::Redraw
            }
        }
    }

    /// Opens the profile for the selected house's lord link, if there is one.
    fn open_profile(&mut self) -> Tick {
        if self.state.category != Category::Houses {
            return Tick::Idle;
        }

        let rows = collection_rows(self.state.category, &self.store, &self.resolver);
        let visible = self.state.view.visible_rows(&rows, columns(self.state.category));
        let Some(&record) = visible.get(self.state.selected_row) else {
            return Tick::Idle;
        };
        let Some(url) = self
            .store
            .houses()
            .items()
            .get(record)
            .and_then(|house| house.current_lord.clone())
        else {
            return Tick::Idle;
        };

        self.state.open_profile(url.clone());
        self.fetcher.spawn_profile(url);
        Tick::Redraw
    }

    fn on_net_event(&mut self, event: NetEvent) {
        match event {
            NetEvent::Page {
                category,
                seq,
                outcome,
            } => {
                match outcome {
                    Ok(PageData::Houses(items)) => {
                        if self.store.complete_houses(seq, Ok(items)) {
                            self.request_lord_resolutions();
                        }
                    }
                    Ok(PageData::Characters(items)) => {
                        self.store.complete_characters(seq, Ok(items));
                    }
                    Ok(PageData::Books(items)) => {
                        self.store.complete_books(seq, Ok(items));
                    }
                    Err(error) => {
                        tracing::warn!(%category, %error, "page fetch failed");
                        let message = error.to_string();
                        match category {
                            Category::Houses => {
                                self.store.complete_houses(seq, Err(message));
                            }
                            Category::Characters => {
                                self.store.complete_characters(seq, Err(message));
                            }
                            Category::Books => {
                                self.store.complete_books(seq, Err(message));
                            }
                        }
                    }
                }
                self.clamp_selection();
            }
            NetEvent::Lord { url, outcome } => {
                let outcome = outcome.map_err(|error| {
                    tracing::debug!(%url, %error, "lord resolution failed");
                    error.to_string()
                });
                self.resolver.resolve(&url, outcome);
            }
            NetEvent::Profile { url, outcome } => {
                if let AppMode::Profile(profile) = &mut self.state.mode {
                    if profile.url == url {
                        match outcome {
                            Ok(character) => profile.character = Some(character),
                            Err(error) => {
                                tracing::warn!(%url, %error, "profile fetch failed");
                                profile.error = Some(error.to_string());
                            }
                        }
                    }
                }
            }
        }
    }

    /// Issues the page fetch for the current (category, page) pair.
    fn request_page(&mut self) {
        let seq = self.store.begin_fetch(self.state.category);
        self.fetcher
            .spawn_page(self.state.category, seq, self.state.page);
    }

    /// Claims and fetches every distinct unresolved lord link on the current
    /// houses page. Already-settled and in-flight URLs are skipped by the
    /// cache.
    fn request_lord_resolutions(&mut self) {
        let urls: Vec<String> = self
            .store
            .houses()
            .items()
            .iter()
            .filter_map(|house| house.current_lord.clone())
            .collect();

        for url in urls {
            if self.resolver.claim(&url) {
                self.fetcher.spawn_lord(url);
            }
        }
    }

    fn visible_row_count(&self) -> usize {
        let rows = collection_rows(self.state.category, &self.store, &self.resolver);
        self.state
            .view
            .visible_rows(&rows, columns(self.state.category))
            .len()
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_row_count();
        self.state.selected_row = self.state.selected_row.min(count.saturating_sub(1));
    }

    fn render(&mut self, terminal: &mut terminal::Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            state: &self.state,
            store: &self.store,
            lords: &self.resolver,
        };
        ui::render(terminal, &ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maester_api::{ApiConfig, ApiError};
    use maester_core::{FetchStatus, House, ResolutionState};

    /// An app wired to an unroutable endpoint: background fetches fail fast
    /// and nothing leaves the machine.
    fn test_app() -> App {
        App::new(&CliConfig {
            api: ApiConfig {
                base_url: "http://127.0.0.1:9".into(),
                page_size: 5,
            },
            ..CliConfig::default()
        })
        .unwrap()
    }

    fn lorded_house(name: &str, lord_url: &str) -> House {
        House {
            name: name.into(),
            current_lord: Some(lord_url.into()),
            ..House::default()
        }
    }

    #[tokio::test]
    async fn previous_at_floor_issues_no_fetch() {
        let mut app = test_app();
        assert!(matches!(app.apply(Command::PrevPage), Tick::Redraw));
        assert!(app.state.page.at_floor());
        assert_eq!(app.store.status(Category::Houses), FetchStatus::Idle);
    }

    #[tokio::test]
    async fn next_then_previous_restores_page_and_refetches() {
        let mut app = test_app();
        app.apply(Command::NextPage);
        assert_eq!(app.state.page.wire_page(), 2);

        app.apply(Command::PrevPage);
        assert_eq!(app.state.page.wire_page(), 1);
        assert_eq!(app.store.status(Category::Houses), FetchStatus::Loading);
    }

    #[tokio::test]
    async fn category_switch_fetches_page_one_of_new_category() {
        let mut app = test_app();
        app.apply(Command::NextPage);

        app.apply(Command::SelectCategory(Category::Books));
        assert_eq!(app.state.category, Category::Books);
        assert!(app.state.page.at_floor());
        assert_eq!(app.store.status(Category::Books), FetchStatus::Loading);

        // Reselecting the active category issues nothing new.
        let seq_before = app.store.begin_fetch(Category::Books);
        app.apply(Command::SelectCategory(Category::Books));
        assert_eq!(app.store.begin_fetch(Category::Books), seq_before + 1);
    }

    #[tokio::test]
    async fn houses_page_completion_claims_lord_urls() {
        let mut app = test_app();
        let seq = app.store.begin_fetch(Category::Houses);
        let url = "http://127.0.0.1:9/characters/339";

        app.on_net_event(NetEvent::Page {
            category: Category::Houses,
            seq,
            outcome: Ok(PageData::Houses(vec![
                lorded_house("Stark", url),
                lorded_house("Karstark", url),
            ])),
        });

        // One claim for the shared URL; the duplicate row was skipped.
        assert_eq!(app.resolver.get(url), Some(&ResolutionState::Pending));
    }

    #[tokio::test]
    async fn lord_completion_updates_resolver() {
        let mut app = test_app();
        let url = "http://127.0.0.1:9/characters/339";
        app.resolver.claim(url);

        app.on_net_event(NetEvent::Lord {
            url: url.into(),
            outcome: Ok("Eddard Stark".into()),
        });
        assert_eq!(app.resolver.display(url), "Eddard Stark");
    }

    #[tokio::test]
    async fn profile_completion_fills_open_profile_only() {
        let mut app = test_app();
        let url = "http://127.0.0.1:9/characters/339".to_string();
        app.state.open_profile(url.clone());

        // A completion for some other URL is ignored.
        app.on_net_event(NetEvent::Profile {
            url: "http://127.0.0.1:9/characters/1".into(),
            outcome: Err(ApiError::Status { code: 500 }),
        });
        let AppMode::Profile(profile) = &app.state.mode else {
            panic!("profile should be open");
        };
        assert!(profile.error.is_none());

        app.on_net_event(NetEvent::Profile {
            url,
            outcome: Ok(maester_core::Character {
                name: "Eddard Stark".into(),
                ..maester_core::Character::default()
            }),
        });
        let AppMode::Profile(profile) = &app.state.mode else {
            panic!("profile should be open");
        };
        assert_eq!(profile.character.as_ref().unwrap().name, "Eddard Stark");
    }

    #[tokio::test]
    async fn open_profile_ignores_non_house_categories() {
        let mut app = test_app();
        app.state.select_category(Category::Books);
        assert!(matches!(app.apply(Command::OpenProfile), Tick::Idle));
        assert!(!app.state.in_profile());
    }
}
