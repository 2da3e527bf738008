//! Terminal session driving [`App`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, bail};
use medibook_core::DirectoryStore;
use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::App;
use crate::builder::DirectoryUi;
use crate::outcome::SessionOutcome;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Browse `store` with default settings until the user exits.
pub fn run(store: DirectoryStore) -> Result<SessionOutcome> {
	DirectoryUi::new(store).run()
}

/// Background reader forwarding key presses from the terminal.
struct KeyReader {
	keys: mpsc::Receiver<KeyEvent>,
	alive: Arc<AtomicBool>,
	worker: Option<JoinHandle<Result<()>>>,
}

impl KeyReader {
	fn spawn() -> Self {
		let (tx, keys) = mpsc::channel();
		let alive = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&alive);
		let worker = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if !event::poll(POLL_INTERVAL)? {
					continue;
				}
				if let Event::Key(key) = event::read()?
					&& key.kind == KeyEventKind::Press
					&& tx.send(key).is_err()
				{
					break;
				}
			}
			Ok(())
		});
		Self {
			keys,
			alive,
			worker: Some(worker),
		}
	}

	/// Keys received since the last call, oldest first.
	fn pending(&self) -> Result<Vec<KeyEvent>> {
		let mut keys = Vec::new();
		loop {
			match self.keys.try_recv() {
				Ok(key) => keys.push(key),
				Err(mpsc::TryRecvError::Empty) => return Ok(keys),
				Err(mpsc::TryRecvError::Disconnected) => {
					bail!("terminal input reader stopped")
				}
			}
		}
	}

	fn stop(mut self) -> Result<()> {
		self.alive.store(false, Ordering::Relaxed);
		match self.worker.take().map(JoinHandle::join) {
			Some(Ok(result)) => result,
			Some(Err(panic)) => std::panic::resume_unwind(panic),
			None => Ok(()),
		}
	}
}

impl App<'_> {
	/// Drive the terminal until the user exits, restoring it afterwards.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		let reader = KeyReader::spawn();

		let result = (|| -> Result<SessionOutcome> {
			loop {
				for key in reader.pending()? {
					if let Some(outcome) = self.handle_key(key)? {
						return Ok(outcome);
					}
				}
				terminal.draw(|frame| self.draw(frame))?;
				thread::sleep(FRAME_INTERVAL);
			}
		})();

		ratatui::restore();
		reader.stop()?;

		if let Ok(outcome) = &result {
			log::info!(
				"session ended with {} confirmed booking(s)",
				outcome.bookings_confirmed
			);
		}
		result
	}
}
