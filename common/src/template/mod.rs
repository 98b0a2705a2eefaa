//! Named-slot HTML templates.
//!
//! A template is plain HTML in which record fields appear as tokens of the
//! form `### NAME ###` (for instance `### NOMBRE ###`). [`Template::parse`]
//! splits the text once into literal segments and typed [`Slot`]s, and
//! rendering concatenates the literals with the values of the record. Because
//! substitution never rescans its own output, a field value that happens to
//! look like a token is emitted verbatim.
//!
//! Two families of slots exist:
//! - [`Field`]: the seven record fields, filled from a [`Person`].
//! - [`ViewSlot`]: state of the single-record form (previous/next ids, whether
//!   the editable inputs are disabled, which action links are visible), filled
//!   from a [`FormState`].
//!
//! Markers with an unknown name are not slots and stay in the output as text.

mod builtin;

pub use builtin::{Templates, form_ids};

use crate::model::Person;

const OPEN: &str = "### ";
const CLOSE: &str = " ###";
const MARKER: &str = "###";

/// One field of a person as it appears in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Surname,
    BirthDate,
    Country,
    Participations,
    GoldMedals,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::Surname,
        Field::BirthDate,
        Field::Country,
        Field::Participations,
        Field::GoldMedals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "NOMBRE",
            Field::Surname => "APELLIDO",
            Field::BirthDate => "FECHA DE ACIMIENTO",
            Field::Country => "PAÍS",
            Field::Participations => "PARTICIPACIONES MUNDIALES",
            Field::GoldMedals => "MEDALLAS DE ORO",
        }
    }

    pub fn token(self) -> String {
        token(self.name())
    }

    /// Text written in place of the token for `person`.
    pub fn value(self, person: &Person) -> String {
        let data = &person.data;
        match self {
            Field::Id => person.id.clone(),
            Field::Name => data.name.clone(),
            Field::Surname => data.surname.clone(),
            Field::BirthDate => data.birth_date.to_string(),
            Field::Country => data.country.clone(),
            Field::Participations => data.participations_text(),
            Field::GoldMedals => data.gold_medals.to_string(),
        }
    }
}

/// Form state slots, resolved by the display controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewSlot {
    Previous,
    Next,
    Disabled,
    PrimaryActions,
    EditActions,
}

impl ViewSlot {
    pub const ALL: [ViewSlot; 5] = [
        ViewSlot::Previous,
        ViewSlot::Next,
        ViewSlot::Disabled,
        ViewSlot::PrimaryActions,
        ViewSlot::EditActions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ViewSlot::Previous => "ANTERIOR",
            ViewSlot::Next => "SIGUIENTE",
            ViewSlot::Disabled => "DESHABILITADO",
            ViewSlot::PrimaryActions => "OPCIONES PRIMARIAS",
            ViewSlot::EditActions => "OPCIONES EDICION",
        }
    }

    pub fn token(self) -> String {
        token(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Field(Field),
    View(ViewSlot),
}

impl Slot {
    fn from_name(name: &str) -> Option<Slot> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .map(Slot::Field)
            .or_else(|| {
                ViewSlot::ALL
                    .into_iter()
                    .find(|v| v.name() == name)
                    .map(Slot::View)
            })
    }
}

/// CSS class that shows an action link.
pub const CLASS_SHOW: &str = "mostrar";
/// CSS class that hides an action link.
pub const CLASS_HIDE: &str = "ocultar";

/// Values for the [`ViewSlot`]s of the single-record form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub previous: String,
    pub next: String,
    pub editing: bool,
}

impl FormState {
    pub fn read_only(previous: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            next: next.into(),
            editing: false,
        }
    }

    pub fn editing(mut self) -> Self {
        self.editing = true;
        self
    }

    fn value(&self, slot: ViewSlot) -> &str {
        match slot {
            ViewSlot::Previous => &self.previous,
            ViewSlot::Next => &self.next,
            ViewSlot::Disabled if self.editing => "",
            ViewSlot::Disabled => "disabled",
            ViewSlot::PrimaryActions if self.editing => CLASS_HIDE,
            ViewSlot::PrimaryActions => CLASS_SHOW,
            ViewSlot::EditActions if self.editing => CLASS_SHOW,
            ViewSlot::EditActions => CLASS_HIDE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = text;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let slot = after_open.find(CLOSE).and_then(|end| {
                Slot::from_name(&after_open[..end]).map(|slot| (slot, end))
            });

            match slot {
                Some((slot, end)) => {
                    literal.push_str(&rest[..start]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(slot));
                    rest = &after_open[end + CLOSE.len()..];
                }
                None => {
                    // Not one of ours: keep the marker and look for the next one.
                    let skip = start + MARKER.len();
                    literal.push_str(&rest[..skip]);
                    rest = &rest[skip..];
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Slots in order of appearance, repeated ones included.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(*slot),
            Segment::Literal(_) => None,
        })
    }

    /// Fills every record field of `person`. Form slots, if any, get the
    /// read-only state with empty navigation ids.
    pub fn substitute(&self, person: &Person) -> String {
        self.render(person, &FormState::default())
    }

    pub fn render(&self, person: &Person, state: &FormState) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Slot::Field(field)) => out.push_str(&field.value(person)),
                Segment::Slot(Slot::View(slot)) => out.push_str(state.value(*slot)),
            }
        }
        out
    }

    /// The template text with tokens in place of the slots.
    pub fn source(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.clone(),
                Segment::Slot(Slot::Field(field)) => field.token(),
                Segment::Slot(Slot::View(slot)) => slot.token(),
            })
            .collect()
    }
}

fn token(name: &str) -> String {
    format!("{OPEN}{name}{CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BirthDate, PersonData};

    fn person() -> Person {
        Person::new(
            "42",
            PersonData {
                name: "Jamie".to_string(),
                surname: "Anderson".to_string(),
                birth_date: BirthDate {
                    day: 13,
                    month: 9,
                    year: 1990,
                },
                country: "Estados Unidos".to_string(),
                participations: vec![2013, 2017, 2021],
                gold_medals: 2,
            },
        )
    }

    #[test]
    fn replaces_every_occurrence_of_every_field() {
        let template = Template::parse(
            "<tr title=\"### ID ###\"><td>### ID ###</td><td>### NOMBRE ### ### APELLIDO ###</td>\
             <td>### FECHA DE ACIMIENTO ###</td><td>### PAÍS ###</td>\
             <td>### PARTICIPACIONES MUNDIALES ###</td><td>### MEDALLAS DE ORO ###</td></tr>",
        );
        let html = template.substitute(&person());
        assert_eq!(
            html,
            "<tr title=\"42\"><td>42</td><td>Jamie Anderson</td>\
             <td>13/9/1990</td><td>Estados Unidos</td>\
             <td>2013,2017,2021</td><td>2</td></tr>"
        );
        assert!(!html.contains("###"));
    }

    #[test]
    fn text_outside_slots_is_untouched() {
        let text = "  <p>Ñandú & <b>co</b></p>\n\t";
        let template = Template::parse(text);
        assert_eq!(template.slots().count(), 0);
        assert_eq!(template.substitute(&person()), text);
        assert_eq!(template.source(), text);
    }

    #[test]
    fn unknown_markers_stay_literal() {
        let template = Template::parse("### FOO ### ### ID ### ###");
        assert_eq!(template.slots().collect::<Vec<_>>(), vec![Slot::Field(Field::Id)]);
        assert_eq!(template.substitute(&person()), "### FOO ### 42 ###");
    }

    #[test]
    fn values_looking_like_tokens_are_not_substituted_again() {
        let mut p = person();
        p.data.name = "### APELLIDO ###".to_string();
        let html = Template::parse("### NOMBRE ###|### APELLIDO ###").substitute(&p);
        assert_eq!(html, "### APELLIDO ###|Anderson");
    }

    #[test]
    fn form_state_fills_view_slots() {
        let template = Template::parse(
            "<a data-id=\"### ANTERIOR ###\" class=\"### OPCIONES PRIMARIAS ###\"></a>\
             <input ### DESHABILITADO ###/>\
             <a class=\"### OPCIONES EDICION ###\" data-id=\"### SIGUIENTE ###\"></a>",
        );
        let read_only = template.render(&person(), &FormState::read_only("41", "43"));
        assert_eq!(
            read_only,
            "<a data-id=\"41\" class=\"mostrar\"></a><input disabled/><a class=\"ocultar\" data-id=\"43\"></a>"
        );
        let editing = template.render(&person(), &FormState::read_only("41", "43").editing());
        assert_eq!(
            editing,
            "<a data-id=\"41\" class=\"ocultar\"></a><input /><a class=\"mostrar\" data-id=\"43\"></a>"
        );
    }

    #[test]
    fn field_positions_can_be_read_back() {
        let template = Template::parse("[### NOMBRE ###][### PAÍS ###][### MEDALLAS DE ORO ###]");
        let html = template.substitute(&person());
        let parts: Vec<&str> = html
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split("][")
            .collect();
        assert_eq!(parts, vec!["Jamie", "Estados Unidos", "2"]);
    }

    #[test]
    fn source_round_trips_tokens() {
        let text = "<td>### PAÍS ###</td><td>### SIGUIENTE ###</td>";
        assert_eq!(Template::parse(text).source(), text);
    }
}
