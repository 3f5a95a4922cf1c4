use crate::core::detail_view::DetailView;
use crate::core::state::{App, DetailScreen, DetailStatus, ListScreen, Screen};
use crate::tui::component::Component;
use crate::tui::components::{
    DetailPanel, EntryGrid, GotoPrompt, PaginationBar, StatusView, TitleBar,
};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

const LIST_LOADING: &str = "Loading Pokemon List...";
const LIST_FAILED: &str = "Failed to Load Pokemon";
const DETAIL_LOADING: &str = "Loading Pokemon...";
const DETAIL_NOT_FOUND: &str = "Pokemon Not Found!";

/// Key hint for the title bar, depending on the mounted screen and mode.
fn hint(app: &App, tui: &TuiState) -> &'static str {
    if tui.goto_prompt.is_some() {
        return "type an id  Enter go  Esc cancel";
    }
    match &app.screen {
        Screen::List(_) if tui.input_mode == InputMode::Filter => "typing filters  Enter/Esc done",
        Screen::List(list) if list.error => "r retry  g go to  q quit",
        Screen::List(_) => "/ search  arrows select  Enter open  n/p page  r reload  g go to  q quit",
        Screen::Detail(detail) if detail.status() == DetailStatus::NotFound => {
            "h home  b/Esc back  g go to  q quit"
        }
        Screen::Detail(_) => "b/Esc back  arrows scroll  h home  g go to  q quit",
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, body_area] = layout.areas(frame.area());

    TitleBar::new(app.route().path(), hint(app, tui).to_string()).render(frame, title_area);

    match &app.screen {
        Screen::List(list) => draw_list(frame, body_area, list, tui, spinner_frame),
        Screen::Detail(detail) => draw_detail(frame, body_area, detail, tui, spinner_frame),
    }

    if let Some(prompt) = tui.goto_prompt.as_mut() {
        GotoPrompt::new(prompt).render(frame, frame.area());
    }
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    list: &ListScreen,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    // Loading and failure replace the whole screen, filter and buttons included.
    if list.is_loading {
        StatusView::loading(LIST_LOADING, spinner_frame).render(frame, area);
        return;
    }
    if list.error {
        StatusView::failure(LIST_FAILED, "[r] Retry").render(frame, area);
        return;
    }

    use Constraint::{Length, Min};
    let [filter_area, grid_area, pager_area] =
        Layout::vertical([Length(3), Min(0), Length(1)]).areas(area);

    tui.filter_box.render(frame, filter_area);

    let visible = list.visible_entries();
    EntryGrid::new(&mut tui.grid, &visible, &list.filter).render(frame, grid_area);

    PaginationBar {
        page: list.page,
        total_pages: list.total_pages,
        previous_enabled: list.can_go_previous(),
        next_enabled: list.can_go_next(),
    }
    .render(frame, pager_area);
}

fn draw_detail(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailScreen,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    match detail.status() {
        DetailStatus::Loading => {
            StatusView::loading(DETAIL_LOADING, spinner_frame).render(frame, area)
        }
        DetailStatus::NotFound => {
            StatusView::failure(DETAIL_NOT_FOUND, "[h] Go Back to Home").render(frame, area)
        }
        DetailStatus::Ready(record) => {
            let view = DetailView::from(record);
            DetailPanel::new(&mut tui.detail_panel, &view).render(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, LoadedPage};
    use crate::core::action::{Action, update};
    use crate::core::state::Route;
    use crate::test_support::{buffer_text, record};
    use crate::tui::components::GotoPromptState;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn loaded_list(count: u32, ids: std::ops::RangeInclusive<u32>) -> App {
        let (mut app, _) = App::start(Route::List);
        update(
            &mut app,
            Action::PageLoaded {
                page: 1,
                result: Ok(LoadedPage {
                    count,
                    entries: ids.map(record).collect(),
                }),
            },
        );
        app
    }

    #[test]
    fn test_list_loading_replaces_screen() {
        let (app, _) = App::start(Route::List);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Pokemon Explorer"));
        assert!(text.contains(LIST_LOADING));
        assert!(!text.contains("Search Pokemon..."));
        assert!(!text.contains("Page 1 of"));
    }

    #[test]
    fn test_list_loaded_shows_filter_grid_and_pager() {
        let app = loaded_list(120, 1..=4);
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Search Pokemon..."));
        assert!(text.contains("Bulbasaur"));
        assert!(text.contains("#004"));
        assert!(text.contains("Page 1 of 6"));
    }

    #[test]
    fn test_list_filter_hides_non_matching_cards() {
        let mut app = loaded_list(9, 1..=9);
        update(&mut app, Action::FilterChanged("CHAR".to_string()));
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("Charmander"));
        assert!(text.contains("Charizard"));
        assert!(!text.contains("Bulbasaur"));
    }

    #[test]
    fn test_list_failure_offers_retry() {
        let (mut app, _) = App::start(Route::List);
        update(
            &mut app,
            Action::PageLoaded {
                page: 1,
                result: Err(FetchError::Network("refused".to_string())),
            },
        );
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains(LIST_FAILED));
        assert!(text.contains("[r] Retry"));
    }

    #[test]
    fn test_detail_states() {
        let (mut app, _) = App::start(Route::Detail(Some("25".to_string())));
        assert!(draw(&app, &mut TuiState::new()).contains(DETAIL_LOADING));

        update(
            &mut app,
            Action::DetailLoaded {
                id: "25".to_string(),
                result: Ok(record(25)),
            },
        );
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains("/pokemon/25"));
        assert!(text.contains("Pikachu"));
        assert!(text.contains("Type: electric, fairy"));

        let (mut app, _) = App::start(Route::Detail(Some("9999".to_string())));
        update(
            &mut app,
            Action::DetailLoaded {
                id: "9999".to_string(),
                result: Err(FetchError::Status {
                    status: 404,
                    url: "https://pokeapi.test/pokemon/9999".to_string(),
                }),
            },
        );
        let text = draw(&app, &mut TuiState::new());
        assert!(text.contains(DETAIL_NOT_FOUND));
        assert!(text.contains("[h] Go Back to Home"));
    }

    #[test]
    fn test_goto_prompt_draws_over_screen() {
        let app = loaded_list(120, 1..=4);
        let mut tui = TuiState::new();
        tui.goto_prompt = Some(GotoPromptState::new());
        let text = draw(&app, &mut tui);
        assert!(text.contains("Go to"));
        assert!(text.contains("Enter go  Esc cancel"));
    }
}
