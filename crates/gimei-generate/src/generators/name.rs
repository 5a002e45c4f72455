use gimei_core::{Gender, Names};

use crate::errors::GenerationError;
use crate::generators::choice;
use crate::model::GimeiName;
use crate::randomizer::Randomizer;

/// Draws a full name from `names`.
///
/// Draw order: gender (only when `gender` is `None`), first name, last name.
/// The last name is independent of gender.
pub fn generate_name<R>(
    names: &Names,
    gender: Option<Gender>,
    randomizer: &R,
) -> Result<GimeiName, GenerationError>
where
    R: Randomizer + ?Sized,
{
    let gender = match gender {
        Some(gender) => gender,
        None => *choice(randomizer, "gender", &Gender::ALL)?,
    };
    let first = choice(randomizer, first_name_table(gender), names.first_name.for_gender(gender))?;
    let last = choice(randomizer, "last_name", &names.last_name)?;

    Ok(GimeiName::compose(gender, first.clone(), last.clone()))
}

fn first_name_table(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "first_name.male",
        Gender::Female => "first_name.female",
    }
}
