//! Repository for the `characters` and `character_characteristics` tables.

use acolyte_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::{
    Character, CharacterAssociation, CharacterSheet, CreateCharacter, UpdateCharacter,
};
use crate::models::characteristic::{CharacterCharacteristic, SetCharacteristic};
use crate::repositories::LinkRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, home_world_id, career_path_id, home_world_class_id, \
    divination_id, wound, fate_point, wealth, sex, age, hair_color, eye_color, skin_color, \
    created_at, updated_at";

/// Column list for the `character_characteristics` table.
const CHARACTERISTIC_COLUMNS: &str =
    "id, character_id, characteristic, value, created_at, updated_at";

/// Provides CRUD operations for characters plus home world and
/// characteristic helpers.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row. The home world
    /// always starts unset.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, career_path_id, age, sex)
             VALUES ($1, $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.career_path_id)
            .bind(input.age)
            .bind(&input.sex)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    ///
    /// For the `Option<Option<_>>` fields a `Some(None)` clears the column.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                career_path_id = CASE WHEN $3 THEN $4 ELSE career_path_id END,
                home_world_class_id = CASE WHEN $5 THEN $6 ELSE home_world_class_id END,
                divination_id = CASE WHEN $7 THEN $8 ELSE divination_id END,
                wound = CASE WHEN $9 THEN $10 ELSE wound END,
                fate_point = CASE WHEN $11 THEN $12 ELSE fate_point END,
                wealth = CASE WHEN $13 THEN $14 ELSE wealth END,
                sex = COALESCE($15, sex),
                age = CASE WHEN $16 THEN $17 ELSE age END,
                hair_color = COALESCE($18, hair_color),
                eye_color = COALESCE($19, eye_color),
                skin_color = COALESCE($20, skin_color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.career_path_id.is_some())
            .bind(input.career_path_id.flatten())
            .bind(input.home_world_class_id.is_some())
            .bind(input.home_world_class_id.flatten())
            .bind(input.divination_id.is_some())
            .bind(input.divination_id.flatten())
            .bind(input.wound.is_some())
            .bind(input.wound.flatten())
            .bind(input.fate_point.is_some())
            .bind(input.fate_point.flatten())
            .bind(input.wealth.is_some())
            .bind(input.wealth.flatten())
            .bind(&input.sex)
            .bind(input.age.is_some())
            .bind(input.age.flatten())
            .bind(&input.hair_color)
            .bind(&input.eye_color)
            .bind(&input.skin_color)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    ///
    /// Associations and characteristics cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Home world
    // -----------------------------------------------------------------------

    /// Overwrite the character's home world, or clear it with `None`.
    ///
    /// The row is locked for the duration of the transaction so concurrent
    /// writers for the same character serialize instead of losing an update.
    /// Returns `None` (and writes nothing) if the character does not exist.
    pub async fn set_home_world(
        pool: &PgPool,
        id: DbId,
        home_world_id: Option<DbId>,
    ) -> Result<Option<Character>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM characters WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "UPDATE characters SET home_world_id = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(home_world_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(character_id = id, ?home_world_id, "Character home world updated");
        Ok(Some(character))
    }

    // -----------------------------------------------------------------------
    // Sheet
    // -----------------------------------------------------------------------

    /// Load a character with every association id and characteristic value.
    pub async fn find_sheet(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterSheet>, sqlx::Error> {
        let Some(character) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let ids = |a: CharacterAssociation| LinkRepo::linked_ids(pool, a.link(), id);

        Ok(Some(CharacterSheet {
            character,
            skill_ids: ids(CharacterAssociation::Skills).await?,
            talent_ids: ids(CharacterAssociation::Talents).await?,
            gear_ids: ids(CharacterAssociation::Gear).await?,
            rank_ids: ids(CharacterAssociation::Ranks).await?,
            trait_ids: ids(CharacterAssociation::Traits).await?,
            quirk_ids: ids(CharacterAssociation::Quirks).await?,
            armour_ids: ids(CharacterAssociation::Armours).await?,
            mutation_ids: ids(CharacterAssociation::Mutations).await?,
            characteristics: Self::list_characteristics(pool, id).await?,
        }))
    }

    // -----------------------------------------------------------------------
    // Characteristics
    // -----------------------------------------------------------------------

    /// All characteristic values for a character, ordered by code.
    pub async fn list_characteristics(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<CharacterCharacteristic>, sqlx::Error> {
        let query = format!(
            "SELECT {CHARACTERISTIC_COLUMNS} FROM character_characteristics
             WHERE character_id = $1
             ORDER BY characteristic"
        );
        sqlx::query_as::<_, CharacterCharacteristic>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await
    }

    /// Insert or overwrite characteristic values in one transaction.
    ///
    /// Characteristics not mentioned in `values` are left as they are.
    pub async fn upsert_characteristics(
        pool: &PgPool,
        character_id: DbId,
        values: &[SetCharacteristic],
    ) -> Result<Vec<CharacterCharacteristic>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for entry in values {
            sqlx::query(
                "INSERT INTO character_characteristics (character_id, characteristic, value)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (character_id, characteristic)
                 DO UPDATE SET value = EXCLUDED.value",
            )
            .bind(character_id)
            .bind(entry.characteristic.code())
            .bind(entry.value)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Self::list_characteristics(pool, character_id).await
    }
}
