use common::model::{BirthDate, PersonData};
use log::info;

use super::{DocumentStore, StoreError};

fn athlete(
    name: &str,
    surname: &str,
    (day, month, year): (u32, u32, u32),
    country: &str,
    participations: &[u32],
    gold_medals: u32,
) -> PersonData {
    PersonData {
        name: name.to_string(),
        surname: surname.to_string(),
        birth_date: BirthDate { day, month, year },
        country: country.to_string(),
        participations: participations.to_vec(),
        gold_medals,
    }
}

pub fn sample_athletes() -> Vec<PersonData> {
    vec![
        athlete("Shaun", "White", (3, 9, 1986), "Estados Unidos", &[2003, 2005, 2009], 3),
        athlete("Chloe", "Kim", (23, 4, 2000), "Estados Unidos", &[2019, 2021, 2023], 2),
        athlete("Anna", "Gasser", (16, 8, 1991), "Austria", &[2013, 2017, 2021], 2),
        athlete("Ayumu", "Hirano", (29, 11, 1998), "Japón", &[2015, 2017, 2019], 1),
        athlete("Queralt", "Castellet", (2, 6, 1989), "España", &[2005, 2009, 2013, 2017], 0),
        athlete("Jamie", "Anderson", (13, 9, 1990), "Estados Unidos", &[2013, 2017, 2019], 2),
        athlete("Lucas", "Eguibar", (9, 2, 1994), "España", &[2015, 2017, 2019, 2021], 0),
    ]
}

/// Fills an empty collection with [`sample_athletes`]. Returns how many
/// documents were inserted.
pub fn seed_if_empty(store: &DocumentStore) -> Result<usize, StoreError> {
    if store.count()? > 0 {
        return Ok(0);
    }

    let athletes = sample_athletes();
    for data in &athletes {
        store.create(serde_json::to_value(data)?)?;
    }
    info!(
        "Seeded collection {} with {} documents",
        store.collection(),
        athletes.len()
    );
    Ok(athletes.len())
}
