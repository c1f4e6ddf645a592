use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_users_table::Users,
    m20260301_000002_create_characters_table::Characters,
    m20260301_000003_create_planets_table::Planets,
    m20260301_000004_create_vehicles_table::Vehicles,
};

static IDX_FAVORITES_USER_ID: &str = "idx_favorites_user_id";
static FK_FAVORITES_USER_ID: &str = "fk_favorites_user_id";
static FK_FAVORITES_PLANET_ID: &str = "fk_favorites_planet_id";
static FK_FAVORITES_CHARACTER_ID: &str = "fk_favorites_character_id";
static FK_FAVORITES_VEHICLE_ID: &str = "fk_favorites_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the same migration runs on SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorites::Id))
                    .col(integer(Favorites::UserId))
                    .col(integer_null(Favorites::PlanetId))
                    .col(integer_null(Favorites::CharacterId))
                    .col(integer_null(Favorites::VehicleId))
                    .col(
                        timestamp_with_time_zone(Favorites::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_USER_ID)
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_PLANET_ID)
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_CHARACTER_ID)
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITES_VEHICLE_ID)
                            .from(Favorites::Table, Favorites::VehicleId)
                            .to(Vehicles::Table, Vehicles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITES_USER_ID)
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PlanetId,
    CharacterId,
    VehicleId,
    CreatedAt,
}
