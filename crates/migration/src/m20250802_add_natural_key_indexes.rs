use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on quarters.name for faster lookups during seeding
        manager
            .create_index(
                Index::create()
                    .name("idx_quarters_name")
                    .table(Quarters::Table)
                    .col(Quarters::Name)
                    .to_owned(),
            )
            .await?;

        // Index on the course natural key for reference resolution
        manager
            .create_index(
                Index::create()
                    .name("idx_courses_dept_cid")
                    .table(Courses::Table)
                    .col(Courses::Dept)
                    .col(Courses::Cid)
                    .to_owned(),
            )
            .await?;

        // Index on requirements.name for faster upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_requirements_name")
                    .table(Requirements::Table)
                    .col(Requirements::Name)
                    .to_owned(),
            )
            .await?;

        // Index on majors.name for faster upserts
        manager
            .create_index(
                Index::create()
                    .name("idx_majors_name")
                    .table(Majors::Table)
                    .col(Majors::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes in reverse order
        manager
            .drop_index(Index::drop().name("idx_majors_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_requirements_name").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_dept_cid").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_quarters_name").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quarters {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Dept,
    Cid,
}

#[derive(DeriveIden)]
enum Requirements {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum Majors {
    Table,
    Name,
}
