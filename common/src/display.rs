//! Display controller for the persons views.
//!
//! Owns everything the views need between user actions: the templates, the
//! id list of the last listing, the record currently displayed and the
//! display mode. Each action renders a complete page section into a
//! [`RenderSink`], which replaces the title and body wholesale.
//!
//! ```text
//!            show_many               show_one
//!   Idle ───────────────▶ List ─────────────────▶ Single ◀──┐
//!     │                     ▲                      │  ▲     │ show_one
//!     └── show_one ─────────┼────────────────────▶ │  │     │ (after save)
//!                           │               edit   ▼  │ cancel
//!                           └── show_many ──────  Editing ──┘
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::info::{self, ABOUT_TITLE, HOME_TITLE};
use crate::model::Person;
use crate::model::person::unsigned_text;
use crate::navigation::{IdList, NO_RECORDS};
use crate::requests::PersonUpdate;
use crate::template::{FormState, Templates};

pub const LIST_TITLE: &str = "Listado de personas";
pub const SINGLE_TITLE: &str = "Mostrar una persona";

/// Destination of the rendered HTML (the page's article section).
pub trait RenderSink {
    fn render(&mut self, title: &str, html: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Nothing from the persons views is on screen (startup, home, about).
    #[default]
    Idle,
    List,
    Single,
    Editing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("no se puede {action} en el modo {mode:?}")]
    InvalidTransition {
        action: &'static str,
        mode: DisplayMode,
    },
    #[error("se intenta guardar la persona {edited} pero se está mostrando {displayed}")]
    IdMismatch { edited: String, displayed: String },
    #[error("el valor `{0}` no es un número de medallas válido")]
    InvalidGoldMedals(String),
}

/// Raw values of the form inputs at the moment of saving.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditedFields {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub country: String,
    pub gold_medals: String,
}

#[derive(Debug, Clone, Default)]
pub struct DisplayController {
    templates: Templates,
    ids: IdList,
    displayed: Option<Person>,
    mode: DisplayMode,
}

impl DisplayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_templates(templates: Templates) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn ids(&self) -> &IdList {
        &self.ids
    }

    pub fn displayed(&self) -> Option<&Person> {
        self.displayed.as_ref()
    }

    /// Previous id relative to the displayed record.
    pub fn previous(&self) -> Option<&str> {
        self.ids.previous(self.displayed_id())
    }

    /// Next id relative to the displayed record.
    pub fn next(&self) -> Option<&str> {
        self.ids.next(self.displayed_id())
    }

    fn displayed_id(&self) -> &str {
        self.displayed.as_ref().map_or("", |p| p.id.as_str())
    }

    /// Renders the full listing and remembers its ids for navigation.
    pub fn show_many(&mut self, people: &[Person], sink: &mut impl RenderSink) {
        self.ids = IdList::from_people(people);
        sink.render(LIST_TITLE, self.render_many(people));
        self.mode = DisplayMode::List;
    }

    /// Renders `person` as a read-only form and makes it the displayed record.
    pub fn show_one(&mut self, person: Person, sink: &mut impl RenderSink) {
        let html = self.render_form(&person, false);
        sink.render(SINGLE_TITLE, html);
        self.displayed = Some(person);
        self.mode = DisplayMode::Single;
    }

    pub fn edit(&mut self, sink: &mut impl RenderSink) -> Result<(), DisplayError> {
        let person = self.require(DisplayMode::Single, "editar")?;
        let html = self.render_form(person, true);
        sink.render(SINGLE_TITLE, html);
        self.mode = DisplayMode::Editing;
        Ok(())
    }

    /// Drops the edits by rendering the stored record again.
    pub fn cancel(&mut self, sink: &mut impl RenderSink) -> Result<(), DisplayError> {
        let person = self.require(DisplayMode::Editing, "cancelar")?;
        let html = self.render_form(person, false);
        sink.render(SINGLE_TITLE, html);
        self.mode = DisplayMode::Single;
        Ok(())
    }

    /// Builds the update to send for the edited record.
    ///
    /// The controller stays in [`DisplayMode::Editing`] until the reloaded
    /// record comes back through [`show_one`](Self::show_one); a failed round
    /// trip therefore leaves every piece of state as it was.
    pub fn save(&self, fields: EditedFields) -> Result<PersonUpdate, DisplayError> {
        let person = self.require(DisplayMode::Editing, "guardar")?;
        if fields.id != person.id {
            return Err(DisplayError::IdMismatch {
                edited: fields.id,
                displayed: person.id.clone(),
            });
        }

        let gold_medals = unsigned_text(&fields.gold_medals)
            .ok_or(DisplayError::InvalidGoldMedals(fields.gold_medals))?;

        Ok(PersonUpdate {
            id: fields.id,
            name: fields.name,
            surname: fields.surname,
            country: fields.country,
            gold_medals,
        })
    }

    /// Home view, falling back to the invalid-data message.
    pub fn show_home(&mut self, raw: Option<&Value>, sink: &mut impl RenderSink) {
        let home = info::validate_home(raw).or_invalid();
        sink.render(HOME_TITLE, home.mensaje);
        self.mode = DisplayMode::Idle;
    }

    pub fn show_about(&mut self, raw: Option<&Value>, sink: &mut impl RenderSink) {
        let about = info::validate_about(raw).or_invalid();
        sink.render(ABOUT_TITLE, info::about_html(&about));
        self.mode = DisplayMode::Idle;
    }

    pub fn render_many(&self, people: &[Person]) -> String {
        let t = &self.templates;
        let mut html = t.table_header.source();
        for person in people {
            html.push_str(&t.table_row.substitute(person));
        }
        html.push_str(&t.table_footer.source());
        html
    }

    /// A single record as a one-row table.
    pub fn person_as_table(&self, person: &Person) -> String {
        self.render_many(std::slice::from_ref(person))
    }

    /// Form view of `person`, with navigation taken from the current id list.
    pub fn render_form(&self, person: &Person, editing: bool) -> String {
        let previous = self.ids.previous(&person.id).unwrap_or(NO_RECORDS);
        let next = self.ids.next(&person.id).unwrap_or(NO_RECORDS);
        let mut state = FormState::read_only(previous, next);
        state.editing = editing;
        self.templates.form.render(person, &state)
    }

    fn require(&self, mode: DisplayMode, action: &'static str) -> Result<&Person, DisplayError> {
        match &self.displayed {
            Some(person) if self.mode == mode => Ok(person),
            _ => Err(DisplayError::InvalidTransition {
                action,
                mode: self.mode,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BirthDate, PersonData};
    use crate::template::CLASS_HIDE;

    #[derive(Default)]
    struct Page {
        renders: Vec<(String, String)>,
    }

    impl RenderSink for Page {
        fn render(&mut self, title: &str, html: String) {
            self.renders.push((title.to_string(), html));
        }
    }

    impl Page {
        fn last(&self) -> &(String, String) {
            self.renders.last().unwrap()
        }
    }

    fn person(id: &str, name: &str) -> Person {
        Person::new(
            id,
            PersonData {
                name: name.to_string(),
                surname: "Pérez".to_string(),
                birth_date: BirthDate {
                    day: 1,
                    month: 2,
                    year: 1995,
                },
                country: "España".to_string(),
                participations: vec![2015, 2019],
                gold_medals: 1,
            },
        )
    }

    fn people() -> Vec<Person> {
        vec![person("A", "Ana"), person("B", "Bea"), person("C", "Carla")]
    }

    #[test]
    fn show_many_renders_every_row_and_rebuilds_ids() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_many(&people(), &mut page);

        let (title, html) = page.last();
        assert_eq!(title, LIST_TITLE);
        assert!(html.starts_with("<table"));
        assert!(html.trim_end().ends_with("</table>"));
        for name in ["Ana", "Bea", "Carla"] {
            assert!(html.contains(&format!("<td>{name}</td>")));
        }
        assert!(!html.contains("###"));
        assert_eq!(controller.ids().as_slice(), ["A", "B", "C"]);
        assert_eq!(controller.mode(), DisplayMode::List);
    }

    #[test]
    fn show_one_after_listing_wraps_at_the_head() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        let all = people();
        controller.show_many(&all, &mut page);
        controller.show_one(all[0].clone(), &mut page);

        assert_eq!(controller.previous(), Some("C"));
        assert_eq!(controller.next(), Some("B"));
        let (title, html) = page.last();
        assert_eq!(title, SINGLE_TITLE);
        assert!(html.contains(r#"data-id="C" class="opcion-secundaria mostrar">Anterior"#));
        assert!(html.contains(r#"data-id="B" class="opcion-secundaria mostrar">Siguiente"#));
        assert_eq!(controller.displayed(), Some(&all[0]));
        assert_eq!(controller.mode(), DisplayMode::Single);
    }

    #[test]
    fn show_one_without_listing_uses_the_no_records_sentinel() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_one(person("A", "Ana"), &mut page);
        assert_eq!(controller.previous(), None);
        assert!(page.last().1.contains(&format!("data-id=\"{NO_RECORDS}\"")));
    }

    #[test]
    fn show_one_uses_the_current_list() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_many(&people(), &mut page);
        controller.show_many(&[person("X", "Xe"), person("B", "Bea")], &mut page);
        controller.show_one(person("B", "Bea"), &mut page);
        assert_eq!(controller.previous(), Some("X"));
        assert_eq!(controller.next(), Some("X"));
    }

    #[test]
    fn edit_enables_fields_and_swaps_actions() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_many(&people(), &mut page);
        controller.show_one(person("B", "Bea"), &mut page);
        controller.edit(&mut page).unwrap();

        let html = &page.last().1;
        assert!(html.contains(r#"class="opcion-terciaria editar mostrar">Guardar"#));
        assert!(html.contains(&format!(r#"class="opcion-secundaria {CLASS_HIDE}">Editar"#)));
        assert!(!html.contains(r#"editable" disabled"#));
        assert_eq!(controller.mode(), DisplayMode::Editing);
    }

    #[test]
    fn cancel_restores_the_exact_single_view() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_many(&people(), &mut page);
        controller.show_one(person("C", "Carla"), &mut page);
        let shown = page.last().clone();

        controller.edit(&mut page).unwrap();
        assert_ne!(page.last(), &shown);
        controller.cancel(&mut page).unwrap();
        assert_eq!(page.last(), &shown);
        assert_eq!(controller.mode(), DisplayMode::Single);
    }

    #[test]
    fn actions_outside_their_mode_are_rejected() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();

        assert_eq!(
            controller.edit(&mut page),
            Err(DisplayError::InvalidTransition {
                action: "editar",
                mode: DisplayMode::Idle
            })
        );
        controller.show_many(&people(), &mut page);
        assert!(controller.cancel(&mut page).is_err());
        controller.show_one(person("A", "Ana"), &mut page);
        assert!(controller.cancel(&mut page).is_err());
        assert!(controller.save(EditedFields::default()).is_err());
        assert_eq!(page.renders.len(), 2);
        assert_eq!(controller.mode(), DisplayMode::Single);
    }

    #[test]
    fn save_builds_the_update_and_keeps_editing() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_one(person("A", "Ana"), &mut page);
        controller.edit(&mut page).unwrap();

        let update = controller
            .save(EditedFields {
                id: "A".to_string(),
                name: "Ana María".to_string(),
                surname: "Pérez".to_string(),
                country: "Chile".to_string(),
                gold_medals: " 4 ".to_string(),
            })
            .unwrap();
        assert_eq!(update.name, "Ana María");
        assert_eq!(update.gold_medals, 4);
        assert_eq!(controller.mode(), DisplayMode::Editing);

        controller.show_one(person("A", "Ana María"), &mut page);
        assert_eq!(controller.mode(), DisplayMode::Single);
    }

    #[test]
    fn save_rejects_bad_input() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_one(person("A", "Ana"), &mut page);
        controller.edit(&mut page).unwrap();

        let fields = EditedFields {
            id: "B".to_string(),
            gold_medals: "1".to_string(),
            ..EditedFields::default()
        };
        assert!(matches!(
            controller.save(fields),
            Err(DisplayError::IdMismatch { .. })
        ));

        let fields = EditedFields {
            id: "A".to_string(),
            gold_medals: "muchas".to_string(),
            ..EditedFields::default()
        };
        assert_eq!(
            controller.save(fields),
            Err(DisplayError::InvalidGoldMedals("muchas".to_string()))
        );
    }

    #[test]
    fn person_as_table_wraps_one_row() {
        let controller = DisplayController::new();
        let html = controller.person_as_table(&person("A", "Ana"));
        assert_eq!(html.matches("<tr title=").count(), 1);
        assert!(html.contains("<td>1/2/1995</td>"));
        assert!(html.contains("<td>2015,2019</td>"));
    }

    #[test]
    fn home_and_about_leave_the_persons_views() {
        let mut controller = DisplayController::new();
        let mut page = Page::default();
        controller.show_one(person("A", "Ana"), &mut page);
        controller.show_home(None, &mut page);
        assert_eq!(page.last().0, HOME_TITLE);
        assert_eq!(page.last().1, "Datos Descargados No válidos");
        assert_eq!(controller.mode(), DisplayMode::Idle);
        assert!(controller.edit(&mut page).is_err());
        assert_eq!(controller.displayed().map(|p| p.id.as_str()), Some("A"));
    }
}
