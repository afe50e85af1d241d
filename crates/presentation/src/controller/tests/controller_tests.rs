use super::*;
use std::{sync::Mutex, time::Duration};

use futures::{stream, StreamExt};
use shared::{
    DataState, FoodCategory, GenericMessageInfo, MessageType, Recipe, RecipeId, RecipeListData,
};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::search::SnapshotStream;

fn recipe(id: i64, title: &str) -> Recipe {
    let stamp = "2021-05-01T12:00:00Z".parse().expect("timestamp");
    Recipe {
        id: RecipeId(id),
        title: title.to_string(),
        publisher: "test kitchen".to_string(),
        featured_image: format!("https://img.example/{id}.png"),
        rating: 40,
        source_url: format!("https://recipes.example/{id}"),
        ingredients: vec!["salt".to_string()],
        date_added: stamp,
        date_updated: stamp,
    }
}

fn data(recipes: Vec<Recipe>) -> DataState<RecipeListData> {
    DataState::data(RecipeListData { recipes })
}

struct ScriptedSearch {
    calls: Mutex<Vec<(u32, String)>>,
    script: Vec<DataState<RecipeListData>>,
}

impl ScriptedSearch {
    fn new(script: Vec<DataState<RecipeListData>>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            script,
        })
    }

    fn calls(&self) -> Vec<(u32, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl SearchRecipes for ScriptedSearch {
    fn execute(&self, page: u32, query: &str) -> SnapshotStream {
        self.calls
            .lock()
            .expect("calls lock")
            .push((page, query.to_string()));
        stream::iter(self.script.clone()).boxed()
    }
}

/// A search invocation whose snapshots the test feeds by hand.
struct Gate {
    page: u32,
    query: String,
    tx: mpsc::Sender<DataState<RecipeListData>>,
}

struct GatedSearch {
    gates: mpsc::UnboundedSender<Gate>,
}

impl GatedSearch {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<Gate>) {
        let (gates, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { gates }), rx)
    }
}

impl SearchRecipes for GatedSearch {
    fn execute(&self, page: u32, query: &str) -> SnapshotStream {
        let (tx, rx) = mpsc::channel(8);
        let _ = self.gates.send(Gate {
            page,
            query: query.to_string(),
            tx,
        });
        ReceiverStream::new(rx).boxed()
    }
}

fn quiet_settings() -> ControllerSettings {
    ControllerSettings {
        initial_query: String::new(),
        load_on_start: false,
    }
}

async fn next_gate(gates: &mut mpsc::UnboundedReceiver<Gate>) -> Gate {
    tokio::time::timeout(Duration::from_secs(1), gates.recv())
        .await
        .expect("search invoked")
        .expect("search alive")
}

#[tokio::test]
async fn update_query_never_triggers_a_search() {
    let search = ScriptedSearch::new(vec![data(vec![recipe(1, "unused")])]);
    let controller = RecipeListController::new(search.clone(), quiet_settings()).expect("controller");

    for text in ["c", "ch", "chi", "chicken"] {
        controller
            .process(RecipeListEvent::UpdateQuery(text.to_string()))
            .await;
    }

    let state = controller.state();
    assert!(search.calls().is_empty());
    assert_eq!(state.query, "chicken");
    assert_eq!(state.page, 1);
    assert!(state.recipes.is_empty());
}

#[tokio::test]
async fn new_search_resets_page_and_recipes_before_results_arrive() {
    let (search, mut gates) = GatedSearch::new();
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");

    controller.handle(RecipeListEvent::NextPage);
    let first = next_gate(&mut gates).await;
    assert_eq!(first.page, 2);
    first
        .tx
        .send(data(vec![recipe(1, "Beef Stew")]))
        .await
        .expect("controller listening");
    drop(first);
    controller.wait_idle().await;
    assert_eq!(controller.state().recipes.len(), 1);

    controller.handle(RecipeListEvent::NewSearch);
    let second = next_gate(&mut gates).await;

    let state = controller.state();
    assert_eq!(second.page, 1);
    assert_eq!(state.page, 1);
    assert!(state.recipes.is_empty());
}

#[tokio::test]
async fn next_page_searches_exactly_one_page_ahead() {
    let search = ScriptedSearch::new(vec![DataState::loading(), data(Vec::new())]);
    let controller = RecipeListController::new(
        search.clone(),
        ControllerSettings {
            initial_query: "soup".to_string(),
            load_on_start: false,
        },
    )
    .expect("controller");

    controller.process(RecipeListEvent::NextPage).await;
    controller.process(RecipeListEvent::NextPage).await;

    assert_eq!(
        search.calls(),
        vec![(2, "soup".to_string()), (3, "soup".to_string())]
    );
    assert_eq!(controller.state().page, 3);
}

#[tokio::test]
async fn select_category_sets_query_before_searching() {
    let search = ScriptedSearch::new(vec![data(vec![recipe(3, "Beef Tacos")])]);
    let controller = RecipeListController::new(
        search.clone(),
        ControllerSettings {
            initial_query: "typed text".to_string(),
            load_on_start: false,
        },
    )
    .expect("controller");

    controller
        .process(RecipeListEvent::SelectCategory(FoodCategory::Beef))
        .await;

    let state = controller.state();
    assert_eq!(state.selected_category, Some(FoodCategory::Beef));
    assert_eq!(state.query, "Beef");
    assert_eq!(search.calls(), vec![(1, "Beef".to_string())]);
    assert_eq!(state.recipes, vec![recipe(3, "Beef Tacos")]);
}

#[tokio::test]
async fn unknown_event_only_appends_an_invalid_event_message() {
    let search = ScriptedSearch::new(vec![data(vec![recipe(1, "Pizza"), recipe(2, "Donut")])]);
    let controller = RecipeListController::new(search.clone(), quiet_settings()).expect("controller");
    controller.process(RecipeListEvent::NextPage).await;
    let before = controller.state();

    controller
        .process(RecipeListEvent::Unknown("shake".to_string()))
        .await;

    let after = controller.state();
    assert_eq!(after.queue.len(), before.queue.len() + 1);
    let message = after.queue.peek().expect("queued message");
    assert_eq!(message.title, "Invalid Event");
    assert_eq!(message.message_type, MessageType::Error);
    assert_eq!(
        RecipeListState {
            queue: before.queue.clone(),
            ..after.clone()
        },
        before
    );
    assert_eq!(search.calls().len(), 1);
}

#[tokio::test]
async fn loading_then_data_leaves_recipes_and_clears_loading() {
    let search = ScriptedSearch::new(vec![
        DataState::loading(),
        data(vec![recipe(1, "R1"), recipe(2, "R2")]),
    ]);
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");

    controller.process(RecipeListEvent::LoadRecipes).await;

    let state = controller.state();
    assert!(!state.is_loading);
    assert_eq!(state.recipes, vec![recipe(1, "R1"), recipe(2, "R2")]);
}

#[tokio::test]
async fn every_snapshot_is_published_in_order() {
    let (search, mut gates) = GatedSearch::new();
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");
    let mut rx = controller.subscribe();

    controller.handle(RecipeListEvent::LoadRecipes);
    let gate = next_gate(&mut gates).await;

    gate.tx.send(DataState::loading()).await.expect("listening");
    rx.wait_for(|state| state.is_loading).await.expect("loading published");

    gate.tx
        .send(data(vec![recipe(1, "R1")]))
        .await
        .expect("listening");
    rx.wait_for(|state| !state.is_loading && state.recipes.len() == 1)
        .await
        .expect("data published");
}

#[tokio::test]
async fn search_message_is_appended_after_existing_entries() {
    let failure = GenericMessageInfo::error_dialog("Error", "recipe source unavailable");
    let search = ScriptedSearch::new(vec![DataState::loading(), DataState::error(failure.clone())]);
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");
    controller
        .process(RecipeListEvent::Unknown("tap".to_string()))
        .await;
    let first = controller.state().queue.peek().cloned().expect("invalid event");

    controller.process(RecipeListEvent::LoadRecipes).await;

    let queue: Vec<_> = controller.state().queue.iter().cloned().collect();
    assert_eq!(queue, vec![first, failure]);
    assert!(!controller.state().is_loading);
}

#[tokio::test]
async fn search_failure_keeps_page_and_query() {
    let failure = GenericMessageInfo::error_dialog("Error", "timeout");
    let search = ScriptedSearch::new(vec![DataState::error(failure)]);
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");

    controller
        .process(RecipeListEvent::UpdateQuery("pie".to_string()))
        .await;
    controller.process(RecipeListEvent::NextPage).await;

    let state = controller.state();
    assert_eq!(state.page, 2);
    assert_eq!(state.query, "pie");
    assert_eq!(state.queue.len(), 1);
}

#[tokio::test]
async fn remove_head_message_dismisses_oldest_entry() {
    let search = ScriptedSearch::new(Vec::new());
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");
    controller
        .process(RecipeListEvent::Unknown("first".to_string()))
        .await;
    controller
        .process(RecipeListEvent::Unknown("second".to_string()))
        .await;
    let second_id = controller
        .state()
        .queue
        .iter()
        .nth(1)
        .map(|m| m.id.clone())
        .expect("second message");

    controller.process(RecipeListEvent::RemoveHeadMessage).await;

    let state = controller.state();
    assert_eq!(state.queue.len(), 1);
    assert_eq!(state.queue.peek().map(|m| m.id.clone()), Some(second_id));
}

#[tokio::test]
async fn load_on_start_searches_with_initial_query() {
    let (search, mut gates) = GatedSearch::new();
    let _controller = RecipeListController::new(
        search,
        ControllerSettings {
            initial_query: "pizza".to_string(),
            load_on_start: true,
        },
    )
    .expect("controller");

    let gate = next_gate(&mut gates).await;
    assert_eq!(gate.page, 1);
    assert_eq!(gate.query, "pizza");
}

#[tokio::test]
async fn dropping_controller_cancels_in_flight_search() {
    let (search, mut gates) = GatedSearch::new();
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");

    controller.handle(RecipeListEvent::LoadRecipes);
    let gate = next_gate(&mut gates).await;
    gate.tx.send(DataState::loading()).await.expect("listening");

    drop(controller);

    tokio::time::timeout(Duration::from_secs(1), gate.tx.closed())
        .await
        .expect("search stream dropped with the screen");
}

#[tokio::test]
async fn closed_controller_ignores_new_events() {
    let search = ScriptedSearch::new(vec![data(Vec::new())]);
    let controller = RecipeListController::new(search.clone(), quiet_settings()).expect("controller");

    controller.close();
    controller.handle(RecipeListEvent::LoadRecipes);
    controller.wait_idle().await;

    assert!(search.calls().is_empty());
}

#[tokio::test]
async fn stale_results_can_overwrite_newer_page() {
    let (search, mut gates) = GatedSearch::new();
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");
    let mut rx = controller.subscribe();

    controller.handle(RecipeListEvent::LoadRecipes);
    let stale = next_gate(&mut gates).await;
    controller.handle(RecipeListEvent::NextPage);
    let fresh = next_gate(&mut gates).await;
    assert_eq!((stale.page, fresh.page), (1, 2));

    fresh
        .tx
        .send(data(vec![recipe(1, "p1"), recipe(2, "p2")]))
        .await
        .expect("listening");
    drop(fresh);
    rx.wait_for(|state| state.recipes.len() == 2)
        .await
        .expect("fresh page applied");

    stale
        .tx
        .send(data(vec![recipe(1, "p1")]))
        .await
        .expect("listening");
    drop(stale);
    controller.wait_idle().await;

    let state = controller.state();
    assert_eq!(state.page, 2);
    assert_eq!(state.recipes, vec![recipe(1, "p1")]);
}

#[tokio::test]
async fn state_stream_starts_with_current_snapshot() {
    let search = ScriptedSearch::new(Vec::new());
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");
    controller
        .process(RecipeListEvent::UpdateQuery("donut".to_string()))
        .await;

    let mut states = controller.state_stream();
    let first = states.next().await.expect("current state");
    assert_eq!(first.query, "donut");
}

#[tokio::test]
async fn select_category_from_later_page_restarts_at_page_one() {
    let (search, mut gates) = GatedSearch::new();
    let controller = RecipeListController::new(search, quiet_settings()).expect("controller");

    controller.handle(RecipeListEvent::NextPage);
    let loaded = next_gate(&mut gates).await;
    assert_eq!(loaded.page, 2);
    loaded
        .tx
        .send(data(vec![recipe(1, "Tiramisu"), recipe(2, "Flan")]))
        .await
        .expect("controller listening");
    drop(loaded);
    controller.wait_idle().await;
    assert_eq!(controller.state().recipes.len(), 2);

    controller.handle(RecipeListEvent::SelectCategory(FoodCategory::Dessert));
    let gate = next_gate(&mut gates).await;

    assert_eq!((gate.page, gate.query.as_str()), (1, "Dessert"));
    let state = controller.state();
    assert_eq!(state.page, 1);
    assert!(state.recipes.is_empty());
    assert_eq!(state.selected_category, Some(FoodCategory::Dessert));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_next_pages_each_search_their_own_page() {
    let search = ScriptedSearch::new(vec![DataState::loading(), data(Vec::new())]);
    let controller = RecipeListController::new(search.clone(), quiet_settings()).expect("controller");

    for _ in 0..64 {
        controller.handle(RecipeListEvent::NextPage);
    }
    tokio::time::timeout(Duration::from_secs(5), controller.wait_idle())
        .await
        .expect("all searches finish");

    let mut pages: Vec<u32> = search.calls().into_iter().map(|(page, _)| page).collect();
    pages.sort_unstable();
    assert_eq!(pages, (2..=65).collect::<Vec<_>>());
    assert_eq!(controller.state().page, 65);
}
