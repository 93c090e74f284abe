use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create quarters table
        manager
            .create_table(
                Table::create()
                    .table(Quarters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Quarters::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Quarters::Name).string().not_null())
                    .col(ColumnDef::new(Quarters::Code).small_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Dept).string().not_null())
                    .col(ColumnDef::new(Courses::Cid).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Units).float().not_null())
                    .col(
                        ColumnDef::new(Courses::UpperOnly)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Courses::Quarters).json().not_null())
                    .col(ColumnDef::new(Courses::Prereq).json().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).timestamp().not_null())
                    .to_owned(),
            )
            .await?;

        // Create requirements table
        manager
            .create_table(
                Table::create()
                    .table(Requirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requirements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requirements::Name).string().not_null())
                    .col(ColumnDef::new(Requirements::SubReqs).json().not_null())
                    .to_owned(),
            )
            .await?;

        // Create majors table
        manager
            .create_table(
                Table::create()
                    .table(Majors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Majors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Majors::Name).string().not_null())
                    .col(ColumnDef::new(Majors::Requirements).json().not_null())
                    .col(ColumnDef::new(Majors::Specs).json().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Majors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Requirements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Quarters::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Quarters {
    Table,
    Id,
    Name,
    Code,
}

#[derive(DeriveIden)]
enum Courses {
    Table,
    Id,
    Dept,
    Cid,
    Name,
    Units,
    UpperOnly,
    Quarters,
    Prereq,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Requirements {
    Table,
    Id,
    Name,
    SubReqs,
}

#[derive(DeriveIden)]
enum Majors {
    Table,
    Id,
    Name,
    Requirements,
    Specs,
}
