//! Integration tests for the repository layer against a real database:
//! - Catalog and character CRUD
//! - Association replacement and the character sheet
//! - Characteristic upserts
//! - Cascade / set-null behaviour on delete
//! - Constraint violations

use acolyte_core::catalog::{ArmourType, SkillType};
use acolyte_core::characteristic::CharacteristicType;
use acolyte_db::models::armour::CreateArmour;
use acolyte_db::models::career::{CareerPathAssociation, CreateCareerPath, CreateCareerRank};
use acolyte_db::models::character::{CharacterAssociation, CreateCharacter, UpdateCharacter};
use acolyte_db::models::characteristic::SetCharacteristic;
use acolyte_db::models::gear::SaveGear;
use acolyte_db::models::home_world::{
    CreateHomeWorld, CreateHomeWorldClass, CreateQuirk, HomeWorldAssociation, UpdateHomeWorld,
};
use acolyte_db::models::skill::{CreateSkill, UpdateSkill};
use acolyte_db::models::talent::CreateTalent;
use acolyte_db::repositories::{
    ArmourRepo, CareerPathRepo, CharacterRepo, GearRepo, HomeWorldRepo, LinkRepo, SkillRepo,
    TalentRepo,
};
use assert_matches::assert_matches;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
        career_path_id: None,
        age: None,
        sex: None,
    }
}

fn new_home_world(name: &str, start_roll: i32, end_roll: i32) -> CreateHomeWorld {
    CreateHomeWorld {
        name: name.to_string(),
        description: None,
        life_description: None,
        pc_description: None,
        start_roll,
        end_roll,
    }
}

fn new_skill(name: &str) -> CreateSkill {
    CreateSkill {
        name: name.to_string(),
        skill_type: SkillType::Basic,
        characteristic: CharacteristicType::Intelligence,
        descriptor: None,
        description: None,
    }
}

fn new_rank(name: &str, level: i32) -> CreateCareerRank {
    CreateCareerRank {
        name: name.to_string(),
        description: None,
        min_xp: (level - 1) * 500,
        max_xp: level * 500,
        rank_level: level,
    }
}

fn sql_state(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_starts_without_home_world(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Gideon Ravenor"))
        .await
        .unwrap();
    assert_eq!(character.name, "Gideon Ravenor");
    assert_eq!(character.home_world_id, None);
    assert_eq!(character.sex, "");

    let found = CharacterRepo::find_by_id(&pool, character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, character.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_character_is_partial(pool: PgPool) {
    let character = CharacterRepo::create(
        &pool,
        &CreateCharacter {
            age: Some(31),
            ..new_character("Eisenhorn")
        },
    )
    .await
    .unwrap();

    let updated = CharacterRepo::update(
        &pool,
        character.id,
        &UpdateCharacter {
            wound: Some(Some(12)),
            eye_color: Some("grey".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "Eisenhorn");
    assert_eq!(updated.age, Some(31));
    assert_eq!(updated.wound, Some(12));
    assert_eq!(updated.eye_color, "grey");

    let missing = CharacterRepo::update(&pool, 999_999, &UpdateCharacter::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_character_clears_nullable_fields(pool: PgPool) {
    let path = CareerPathRepo::create(
        &pool,
        &CreateCareerPath {
            name: "Guardsman".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let character = CharacterRepo::create(
        &pool,
        &CreateCharacter {
            career_path_id: Some(path.id),
            age: Some(25),
            ..new_character("Caffran")
        },
    )
    .await
    .unwrap();
    assert_eq!(character.career_path_id, Some(path.id));

    let cleared = CharacterRepo::update(
        &pool,
        character.id,
        &UpdateCharacter {
            career_path_id: Some(None),
            wound: Some(Some(9)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.career_path_id, None);
    assert_eq!(cleared.wound, Some(9));
    assert_eq!(cleared.age, Some(25));

    let cleared = CharacterRepo::update(
        &pool,
        character.id,
        &UpdateCharacter {
            wound: Some(None),
            age: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.wound, None);
    assert_eq!(cleared.age, None);
    assert_eq!(cleared.name, "Caffran");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_characters_by_name(pool: PgPool) {
    for name in ["Medea", "Cherubael", "Bequin"] {
        CharacterRepo::create(&pool, &new_character(name))
            .await
            .unwrap();
    }
    let names: Vec<String> = CharacterRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Bequin", "Cherubael", "Medea"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_home_world_overwrites_and_clears(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Kara"))
        .await
        .unwrap();
    let hive = HomeWorldRepo::create(&pool, &new_home_world("Hive World", 1, 50))
        .await
        .unwrap();
    let feral = HomeWorldRepo::create(&pool, &new_home_world("Feral World", 51, 100))
        .await
        .unwrap();

    let first = CharacterRepo::set_home_world(&pool, character.id, Some(hive.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.home_world_id, Some(hive.id));

    let second = CharacterRepo::set_home_world(&pool, character.id, Some(feral.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.home_world_id, Some(feral.id));

    let cleared = CharacterRepo::set_home_world(&pool, character.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.home_world_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_home_world_missing_character(pool: PgPool) {
    let hive = HomeWorldRepo::create(&pool, &new_home_world("Hive World", 1, 50))
        .await
        .unwrap();
    let result = CharacterRepo::set_home_world(&pool, 424_242, Some(hive.id))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_home_world_unknown_home_world_is_fk_violation(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Nayl"))
        .await
        .unwrap();
    let err = CharacterRepo::set_home_world(&pool, character.id, Some(999_999))
        .await
        .unwrap_err();
    assert_eq!(sql_state(&err).as_deref(), Some("23503"));

    let unchanged = CharacterRepo::find_by_id(&pool, character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.home_world_id, None);
}

// ---------------------------------------------------------------------------
// Sheet, associations, characteristics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_associations_and_sheet(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Aemos"))
        .await
        .unwrap();
    let lore = SkillRepo::create(&pool, &new_skill("Common Lore")).await.unwrap();
    let logic = SkillRepo::create(&pool, &new_skill("Logic")).await.unwrap();
    let autopistol = GearRepo::create(&pool, &SaveGear { name: "Autopistol".into() })
        .await
        .unwrap();

    let skills = CharacterAssociation::Skills.link();
    let ids = LinkRepo::replace(&pool, skills, character.id, &[logic.id, lore.id, logic.id])
        .await
        .unwrap();
    let mut expected = vec![lore.id, logic.id];
    expected.sort();
    assert_eq!(ids, expected);

    LinkRepo::replace(&pool, CharacterAssociation::Gear.link(), character.id, &[autopistol.id])
        .await
        .unwrap();

    // Replacing again swaps the set rather than appending to it.
    let ids = LinkRepo::replace(&pool, skills, character.id, &[lore.id])
        .await
        .unwrap();
    assert_eq!(ids, vec![lore.id]);

    let sheet = CharacterRepo::find_sheet(&pool, character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sheet.skill_ids, vec![lore.id]);
    assert_eq!(sheet.gear_ids, vec![autopistol.id]);
    assert!(sheet.talent_ids.is_empty());
    assert!(sheet.characteristics.is_empty());

    assert!(CharacterRepo::find_sheet(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replace_with_unknown_target_rolls_back(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Fischig"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Scrutiny")).await.unwrap();
    let skills = CharacterAssociation::Skills.link();
    LinkRepo::replace(&pool, skills, character.id, &[skill.id])
        .await
        .unwrap();

    let err = LinkRepo::replace(&pool, skills, character.id, &[999_999])
        .await
        .unwrap_err();
    assert_eq!(sql_state(&err).as_deref(), Some("23503"));

    let ids = LinkRepo::linked_ids(&pool, skills, character.id).await.unwrap();
    assert_eq!(ids, vec![skill.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upsert_characteristics(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Betancore"))
        .await
        .unwrap();
    let set = |characteristic, value| SetCharacteristic {
        characteristic,
        value,
    };

    let values = CharacterRepo::upsert_characteristics(
        &pool,
        character.id,
        &[
            set(CharacteristicType::WeaponSkill, 35),
            set(CharacteristicType::Agility, 40),
        ],
    )
    .await
    .unwrap();
    assert_eq!(values.len(), 2);

    let values = CharacterRepo::upsert_characteristics(
        &pool,
        character.id,
        &[set(CharacteristicType::WeaponSkill, 38)],
    )
    .await
    .unwrap();
    assert_eq!(values.len(), 2);
    let ws = values.iter().find(|v| v.characteristic == "WS").unwrap();
    assert_eq!(ws.value, 38);
    let ag = values.iter().find(|v| v.characteristic == "Ag").unwrap();
    assert_eq!(ag.value, 40);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_same_characteristic_on_two_characters(pool: PgPool) {
    let a = CharacterRepo::create(&pool, &new_character("A")).await.unwrap();
    let b = CharacterRepo::create(&pool, &new_character("B")).await.unwrap();
    let ws = [SetCharacteristic {
        characteristic: CharacteristicType::WeaponSkill,
        value: 30,
    }];

    CharacterRepo::upsert_characteristics(&pool, a.id, &ws)
        .await
        .unwrap();
    CharacterRepo::upsert_characteristics(&pool, b.id, &ws)
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Home worlds
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_home_world_detail(pool: PgPool) {
    let hive = HomeWorldRepo::create(&pool, &new_home_world("Hive World", 21, 46))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Tech-Use")).await.unwrap();
    let path = CareerPathRepo::create(
        &pool,
        &CreateCareerPath {
            name: "Guardsman".into(),
            description: None,
        },
    )
    .await
    .unwrap();

    LinkRepo::replace(&pool, HomeWorldAssociation::Skills.link(), hive.id, &[skill.id])
        .await
        .unwrap();
    LinkRepo::replace(&pool, HomeWorldAssociation::CareerPaths.link(), hive.id, &[path.id])
        .await
        .unwrap();
    let quirk = CreateQuirk {
        name: "Accustomed to Crowds".into(),
    };
    HomeWorldRepo::create_quirk(&pool, hive.id, &quirk).await.unwrap();
    HomeWorldRepo::create_class(
        &pool,
        hive.id,
        &CreateHomeWorldClass {
            name: "Ganger".into(),
            description: None,
        },
    )
    .await
    .unwrap();

    let detail = HomeWorldRepo::find_detail(&pool, hive.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.roll_weight, 25);
    assert_eq!(detail.skill_ids, vec![skill.id]);
    assert_eq!(detail.career_path_ids, vec![path.id]);
    assert!(detail.trait_ids.is_empty());
    assert_eq!(detail.quirks.len(), 1);
    assert_eq!(detail.classes[0].name, "Ganger");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_roll_range_rejected_by_check(pool: PgPool) {
    let err = HomeWorldRepo::create(&pool, &new_home_world("Broken", 60, 40))
        .await
        .unwrap_err();
    assert_eq!(sql_state(&err).as_deref(), Some("23514"));

    let world = HomeWorldRepo::create(&pool, &new_home_world("Void Born", 40, 60))
        .await
        .unwrap();
    let err = HomeWorldRepo::update(
        &pool,
        world.id,
        &UpdateHomeWorld {
            end_roll: Some(10),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_eq!(sql_state(&err).as_deref(), Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_home_world_clears_character_reference(pool: PgPool) {
    let world = HomeWorldRepo::create(&pool, &new_home_world("Forge World", 1, 10))
        .await
        .unwrap();
    let quirk = HomeWorldRepo::create_quirk(&pool, world.id, &CreateQuirk { name: "Cog".into() })
        .await
        .unwrap();
    let character = CharacterRepo::create(&pool, &new_character("Magos"))
        .await
        .unwrap();
    CharacterRepo::set_home_world(&pool, character.id, Some(world.id))
        .await
        .unwrap();
    LinkRepo::replace(&pool, CharacterAssociation::Quirks.link(), character.id, &[quirk.id])
        .await
        .unwrap();

    assert!(HomeWorldRepo::delete(&pool, world.id).await.unwrap());
    assert!(!HomeWorldRepo::delete(&pool, world.id).await.unwrap());

    let sheet = CharacterRepo::find_sheet(&pool, character.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(sheet.character.home_world_id, None);
    assert!(sheet.quirk_ids.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_roll_candidates_ordered_by_id(pool: PgPool) {
    let b = HomeWorldRepo::create(&pool, &new_home_world("B", 51, 100))
        .await
        .unwrap();
    let a = HomeWorldRepo::create(&pool, &new_home_world("A", 1, 51))
        .await
        .unwrap();

    let candidates = HomeWorldRepo::list_roll_candidates(&pool).await.unwrap();
    let ids: Vec<i64> = candidates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);
    assert_eq!(candidates[0].roll_weight, 49);
    assert_eq!(candidates[1].roll_weight, 50);
}

// ---------------------------------------------------------------------------
// Career paths and catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_career_path_detail_and_ranks(pool: PgPool) {
    let path = CareerPathRepo::create(
        &pool,
        &CreateCareerPath {
            name: "Adept".into(),
            description: Some("Scholars of the Imperium".into()),
        },
    )
    .await
    .unwrap();
    CareerPathRepo::create_rank(&pool, path.id, &new_rank("Archivist", 2))
        .await
        .unwrap();
    CareerPathRepo::create_rank(&pool, path.id, &new_rank("Novice", 1))
        .await
        .unwrap();

    let talent = TalentRepo::create(
        &pool,
        &CreateTalent {
            name: "Total Recall".into(),
            prerequisites: None,
            benefit: "Remember everything".into(),
            description: None,
            group: None,
        },
    )
    .await
    .unwrap();
    LinkRepo::replace(&pool, CareerPathAssociation::Talents.link(), path.id, &[talent.id])
        .await
        .unwrap();

    let detail = CareerPathRepo::find_detail(&pool, path.id)
        .await
        .unwrap()
        .unwrap();
    let levels: Vec<i32> = detail.ranks.iter().map(|r| r.rank_level).collect();
    assert_eq!(levels, vec![1, 2]);
    assert_eq!(detail.starting_talent_ids, vec![talent.id]);
    assert!(detail.starting_skill_ids.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_rank_level_rejected(pool: PgPool) {
    let path = CareerPathRepo::create(
        &pool,
        &CreateCareerPath {
            name: "Scum".into(),
            description: None,
        },
    )
    .await
    .unwrap();
    CareerPathRepo::create_rank(&pool, path.id, &new_rank("Dreg", 1))
        .await
        .unwrap();

    let err = CareerPathRepo::create_rank(&pool, path.id, &new_rank("Cutter", 1))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db)
        if db.constraint() == Some("uq_career_ranks_path_level"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_codes_are_stored(pool: PgPool) {
    let skill = SkillRepo::create(
        &pool,
        &CreateSkill {
            skill_type: SkillType::Advanced,
            characteristic: CharacteristicType::Perception,
            ..new_skill("Search")
        },
    )
    .await
    .unwrap();
    assert_eq!(skill.skill_type, "ADVANCED");
    assert_eq!(skill.characteristic, "Per");

    let updated = SkillRepo::update(
        &pool,
        skill.id,
        &UpdateSkill {
            characteristic: Some(CharacteristicType::Intelligence),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.characteristic, "Int");
    assert_eq!(updated.skill_type, "ADVANCED");

    let armour = ArmourRepo::create(
        &pool,
        &CreateArmour {
            name: "Flak Helmet".into(),
            description: None,
            armour_type: ArmourType::Head,
        },
    )
    .await
    .unwrap();
    assert_eq!(armour.armour_type, "HEAD");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_catalog_row_cascades_links(pool: PgPool) {
    let character = CharacterRepo::create(&pool, &new_character("Vibben"))
        .await
        .unwrap();
    let skill = SkillRepo::create(&pool, &new_skill("Dodge")).await.unwrap();
    let skills = CharacterAssociation::Skills.link();
    LinkRepo::replace(&pool, skills, character.id, &[skill.id])
        .await
        .unwrap();

    assert!(SkillRepo::delete(&pool, skill.id).await.unwrap());
    assert!(LinkRepo::linked_ids(&pool, skills, character.id)
        .await
        .unwrap()
        .is_empty());
}
