//! Scripted gateway double and fixture helpers for controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use ripple_feed::{
	Category, CategoryId, ContainerId, EntryId, FeedConfig, FeedController, FeedEntry,
	FeedGateway, FeedKind, FeedReply, FormPayload, FormResponse, PageFragment, PagingAffordance,
};
use ripple_gateway::GatewayError;
use tokio::sync::Notify;
use url::Url;

/// One scripted response, optionally gated on a [`Notify`] so tests can
/// interleave completions.
struct Scripted<T> {
	gate: Option<Arc<Notify>>,
	response: ripple_gateway::Result<T>,
}

/// In-memory gateway that replays scripted responses and records every
/// request it saw.
#[derive(Default)]
pub struct ScriptedGateway {
	fragments: Mutex<VecDeque<Scripted<PageFragment>>>,
	forms: Mutex<VecDeque<Scripted<FormResponse>>>,
	fetched: Mutex<Vec<Url>>,
	submitted: Mutex<Vec<(Url, FormPayload)>>,
}

impl ScriptedGateway {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a fragment response for the next GET.
	pub fn push_fragment(&self, fragment: PageFragment) {
		self.fragments.lock().push_back(Scripted {
			gate: None,
			response: Ok(fragment),
		});
	}

	/// Queues a fragment response released only once the returned handle is
	/// notified.
	pub fn push_gated_fragment(&self, fragment: PageFragment) -> Arc<Notify> {
		let gate = Arc::new(Notify::new());
		self.fragments.lock().push_back(Scripted {
			gate: Some(Arc::clone(&gate)),
			response: Ok(fragment),
		});
		gate
	}

	/// Queues a transport failure for the next GET.
	pub fn push_fragment_error(&self, message: &str) {
		self.fragments.lock().push_back(Scripted {
			gate: None,
			response: Err(GatewayError::Transport(message.to_owned())),
		});
	}

	/// Queues a response for the next POST.
	pub fn push_form(&self, response: FormResponse) {
		self.forms.lock().push_back(Scripted {
			gate: None,
			response: Ok(response),
		});
	}

	/// Queues a transport failure for the next POST.
	pub fn push_form_error(&self, message: &str) {
		self.forms.lock().push_back(Scripted {
			gate: None,
			response: Err(GatewayError::Transport(message.to_owned())),
		});
	}

	/// URLs fetched so far.
	pub fn fetched(&self) -> Vec<Url> {
		self.fetched.lock().clone()
	}

	/// Forms submitted so far.
	pub fn submitted(&self) -> Vec<(Url, FormPayload)> {
		self.submitted.lock().clone()
	}

	pub fn fetch_count(&self) -> usize {
		self.fetched.lock().len()
	}

	pub fn submit_count(&self) -> usize {
		self.submitted.lock().len()
	}
}

#[async_trait::async_trait]
impl FeedGateway for ScriptedGateway {
	async fn fetch_fragment(&self, url: &Url) -> ripple_gateway::Result<PageFragment> {
		self.fetched.lock().push(url.clone());
		let scripted = self
			.fragments
			.lock()
			.pop_front()
			.expect("no scripted fragment left");
		if let Some(gate) = scripted.gate {
			gate.notified().await;
		}
		scripted.response
	}

	async fn submit_form(
		&self,
		action: &Url,
		payload: &FormPayload,
	) -> ripple_gateway::Result<FormResponse> {
		self.submitted.lock().push((action.clone(), payload.clone()));
		let scripted = self
			.forms
			.lock()
			.pop_front()
			.expect("no scripted form response left");
		if let Some(gate) = scripted.gate {
			gate.notified().await;
		}
		scripted.response
	}
}

pub fn url(s: &str) -> Url {
	Url::parse(s).unwrap()
}

pub fn entry(id: &str) -> FeedEntry {
	FeedEntry {
		id: EntryId::new(id),
		html: format!("<li>{id}</li>"),
		replies: Vec::new(),
	}
}

pub fn entry_with_replies(id: &str, replies: &[&str]) -> FeedEntry {
	FeedEntry {
		id: EntryId::new(id),
		html: format!("<li>{id}</li>"),
		replies: replies.iter().map(|r| reply(r, id)).collect(),
	}
}

pub fn reply(id: &str, parent: &str) -> FeedReply {
	FeedReply {
		id: EntryId::new(id),
		parent: EntryId::new(parent),
		html: format!("<li>{id}</li>"),
	}
}

pub fn paging(next: &str) -> PagingAffordance {
	PagingAffordance { url: url(next) }
}

pub fn fragment(entries: Vec<FeedEntry>, paging: Option<PagingAffordance>) -> PageFragment {
	PageFragment {
		raw: format!("raw:{}", entries.len()),
		entries,
		paging,
	}
}

/// Config with an "all" and a "comments" category, infinite scroll off.
pub fn config(container: &str) -> FeedConfig {
	FeedConfig {
		kind: FeedKind::Activities,
		container: ContainerId::new(container),
		infinite_scroll: false,
		categories: vec![
			Category {
				id: CategoryId::all(),
				url: url("https://feed.test/activities/"),
				label: "All".to_owned(),
			},
			Category {
				id: CategoryId::new("comments"),
				url: url("https://feed.test/activities/?type=comment"),
				label: "Comments".to_owned(),
			},
		],
	}
}

/// Same as [`config`] with the infinite-scroll opt-in set.
pub fn infinite_config(container: &str) -> FeedConfig {
	FeedConfig {
		infinite_scroll: true,
		..config(container)
	}
}

pub fn bind(container: &str, gateway: &Arc<ScriptedGateway>) -> Arc<FeedController> {
	bind_with(config(container), gateway)
}

pub fn bind_with(config: FeedConfig, gateway: &Arc<ScriptedGateway>) -> Arc<FeedController> {
	let gateway: Arc<dyn FeedGateway> = Arc::clone(gateway) as Arc<dyn FeedGateway>;
	Arc::new(FeedController::bind(config, gateway))
}
