use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AUTOINCREMENT keeps ids of deleted packages from being handed out again
        manager
            .create_table(
                Table::create()
                    .table(Paquetes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Paquetes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Package fields are optional on create
                    .col(ColumnDef::new(Paquetes::Destino).string().null())
                    .col(ColumnDef::new(Paquetes::Duracion).string().null())
                    .col(ColumnDef::new(Paquetes::Precio).double().null())
                    .col(ColumnDef::new(Paquetes::Descripcion).text().null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Paquetes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Paquetes {
    Table,
    Id,
    Destino,
    Duracion,
    Precio,
    Descripcion,
}
