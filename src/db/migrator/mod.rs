use sea_orm_migration::prelude::*;

mod m20240310_initial;
mod m20240622_add_claim_lookup_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240310_initial::Migration),
            Box::new(m20240622_add_claim_lookup_index::Migration),
        ]
    }
}
