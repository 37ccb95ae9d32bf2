use iced::widget::{
    Column, button, column, container, pick_list, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length, Task};
use shelf_core::{
    BookRecord, CatalogClient, CatalogConfig, PAGE_SIZE_OPTIONS, PageDirection, SearchController,
    SearchTicket, authors_label, format_published_date, pagination_for, result_count_label,
    title_initials, title_label,
};

const TABLE_WIDTH: f32 = 900.0;
const DETAIL_CARD_WIDTH: f32 = 500.0;

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Search,
    SearchCompleted(SearchTicket, Result<Vec<BookRecord>, String>),

    // Table
    ToggleRow(String),

    // Page control
    PageSizeSelected(usize),
    NextPage,
    PrevPage,
}

pub struct AppState {
    client: Option<CatalogClient>,
    controller: SearchController,
    query_input: String,
}

impl AppState {
    pub fn new(config: CatalogConfig) -> Self {
        let controller = SearchController::with_pagination(pagination_for(&config));
        let client = match CatalogClient::new(config) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Failed to create catalog client: {}", e);
                None
            }
        };

        Self {
            client,
            controller,
            query_input: String::new(),
        }
    }
}

pub fn initialize() -> (AppState, Task<Message>) {
    (AppState::new(CatalogConfig::default()), Task::none())
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::QueryChanged(value) => {
            state.query_input = value;
        }
        Message::Search => {
            let Some(client) = state.client.clone() else {
                log::error!("No catalog client available, search skipped");
                return Task::none();
            };

            let ticket = state.controller.begin_search(&state.query_input);
            let text = ticket.text.clone();
            return Task::perform(
                async move { client.search_books(&text).await.map_err(|e| e.to_string()) },
                move |result| Message::SearchCompleted(ticket.clone(), result),
            );
        }
        Message::SearchCompleted(ticket, result) => {
            let outcome = state.controller.complete_search(&ticket, result);
            log::debug!("Search '{}' finished: {:?}", ticket.text, outcome);
        }
        Message::ToggleRow(id) => {
            state.controller.toggle_row(&id);
        }
        Message::PageSizeSelected(size) => {
            state.controller.page_size_change(size);
        }
        Message::NextPage => {
            state.controller.step_page(PageDirection::Next);
        }
        Message::PrevPage => {
            state.controller.step_page(PageDirection::Previous);
        }
    }

    Task::none()
}

pub fn view(state: &AppState) -> Element<Message> {
    let search_field = row![
        text_input("search book here...", &state.query_input)
            .on_input(Message::QueryChanged)
            .on_submit(Message::Search)
            .padding(10)
            .width(Length::Fixed(400.0)),
        button(if state.controller.is_searching() {
            "Searching..."
        } else {
            "Search"
        })
        .on_press(Message::Search)
        .padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut content = column![
        text("Your own library").size(36),
        search_field,
        text("Book's").size(24),
        text(result_count_label(state.controller.result_count())).size(16),
    ]
    .spacing(15)
    .align_x(Alignment::Center);

    if state.controller.result_count() > 0 {
        content = content.push(view_table(state)).push(view_page_control(state));
    }

    container(scrollable(content.padding(20)))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn view_table(state: &AppState) -> Element<Message> {
    let header = row![
        text("#").size(14).width(Length::FillPortion(1)),
        text("Author").size(14).width(Length::FillPortion(6)),
        text("Title").size(14).width(Length::FillPortion(8)),
    ]
    .spacing(10)
    .padding(8);

    let mut rows = Column::new().push(header).spacing(2);
    for record in state.controller.visible() {
        let expanded = state.controller.is_expanded(&record.id);
        let summary = row![
            text(if expanded { "-" } else { "+" })
                .size(14)
                .width(Length::FillPortion(1)),
            text(authors_label(record))
                .size(14)
                .width(Length::FillPortion(6)),
            text(title_label(record))
                .size(14)
                .width(Length::FillPortion(8)),
        ]
        .spacing(10);

        rows = rows.push(
            button(summary)
                .on_press(Message::ToggleRow(record.id.clone()))
                .style(button::text)
                .width(Length::Fill)
                .padding(8),
        );

        if expanded {
            rows = rows.push(view_detail_card(record));
        }
    }

    container(rows)
        .style(container::rounded_box)
        .width(Length::Fixed(TABLE_WIDTH))
        .into()
}

fn view_detail_card(record: &BookRecord) -> Element<Message> {
    let title = title_label(record);
    let published = record
        .published_date()
        .map(format_published_date)
        .unwrap_or_default();

    let header = row![
        container(text(title_initials(&title)).size(16))
            .padding(10)
            .style(container::rounded_box),
        column![text(title).size(16), text(published).size(12)].spacing(4),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut card = column![header].spacing(10);
    if let Some(thumbnail) = record.thumbnail() {
        card = card.push(text(format!("Cover: {}", thumbnail)).size(12));
    }
    if let Some(description) = record.description() {
        card = card.push(text(description).size(14));
    }

    container(card)
        .padding(12)
        .width(Length::Fixed(DETAIL_CARD_WIDTH))
        .style(container::bordered_box)
        .into()
}

fn view_page_control(state: &AppState) -> Element<Message> {
    let pagination = state.controller.pagination();

    row![
        text("Rows per page:").size(14),
        pick_list(
            PAGE_SIZE_OPTIONS,
            Some(pagination.state().page_size),
            Message::PageSizeSelected,
        ),
        text(pagination.displayed_rows_label()).size(14),
        button("Previous")
            .on_press_maybe(pagination.can_go_previous().then_some(Message::PrevPage))
            .padding(5),
        button("Next")
            .on_press_maybe(pagination.can_go_next().then_some(Message::NextPage))
            .padding(5),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
