use gimei_core::Addresses;

use crate::errors::GenerationError;
use crate::generators::choice;
use crate::model::GimeiAddress;
use crate::randomizer::Randomizer;

/// Draws prefecture, city and town independently, in that order.
pub fn generate_address<R>(
    addresses: &Addresses,
    randomizer: &R,
) -> Result<GimeiAddress, GenerationError>
where
    R: Randomizer + ?Sized,
{
    let prefecture = choice(randomizer, "prefecture", &addresses.prefecture)?;
    let city = choice(randomizer, "city", &addresses.city)?;
    let town = choice(randomizer, "town", &addresses.town)?;

    Ok(GimeiAddress::compose(
        prefecture.clone(),
        city.clone(),
        town.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use gimei_core::Record;

    use super::*;
    use crate::randomizer::FixedRandomizer;

    fn addresses() -> Addresses {
        Addresses {
            prefecture: vec![
                Record::new("北海道", "ほっかいどう", "ホッカイドウ", "hokkaido"),
                Record::new("東京都", "とうきょうと", "トウキョウト", "tokyo"),
            ],
            city: vec![
                Record::new("札幌市中央区", "さっぽろしちゅうおうく", "サッポロシチュウオウク", "sapporoshichuoku"),
                Record::new("渋谷区", "しぶやく", "シブヤク", "shibuyaku"),
            ],
            town: vec![
                Record::new("旭ケ丘", "あさひがおか", "アサヒガオカ", "asahigaoka"),
                Record::new("本町", "ほんちょう", "ホンチョウ", "honcho"),
            ],
        }
    }

    #[test]
    fn zero_draw_builds_first_entries() {
        let address = generate_address(&addresses(), &FixedRandomizer(0.0)).expect("address");
        assert_eq!(address.kanji, "北海道札幌市中央区旭ケ丘");
        assert_eq!(address.katakana, "ホッカイドウサッポロシチュウオウクアサヒガオカ");
        assert_eq!(address.prefecture.romaji, "hokkaido");
    }

    #[test]
    fn each_part_uses_its_own_draw() {
        let draws = [0.7, 0.2, 0.9];
        let cursor = Cell::new(0);
        let scripted = || {
            let draw = draws[cursor.get()];
            cursor.set(cursor.get() + 1);
            draw
        };

        let address = generate_address(&addresses(), &scripted).expect("address");
        assert_eq!(address.prefecture.kanji, "東京都");
        assert_eq!(address.city.kanji, "札幌市中央区");
        assert_eq!(address.town.kanji, "本町");
        assert_eq!(address.romaji, "tokyosapporoshichuokuhoncho");
    }

    #[test]
    fn empty_town_table_fails() {
        let mut addresses = addresses();
        addresses.town.clear();

        let result = generate_address(&addresses, &FixedRandomizer(0.0));
        assert!(matches!(
            result,
            Err(GenerationError::EmptySelection { table: "town" })
        ));
    }
}
