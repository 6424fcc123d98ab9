use crate::entities::{claims, external_logins, prelude::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Claims are matched by (user, type, value) on every removal; logins
        // are listed per user. Neither index is unique: duplicate claim
        // pairs are allowed.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_claims_user_type_value")
                    .table(Claims)
                    .col(claims::Column::UserId)
                    .col(claims::Column::ClaimType)
                    .col(claims::Column::ClaimValue)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_external_logins_user")
                    .table(ExternalLogins)
                    .col(external_logins::Column::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_external_logins_user")
                    .table(ExternalLogins)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_claims_user_type_value")
                    .table(Claims)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
