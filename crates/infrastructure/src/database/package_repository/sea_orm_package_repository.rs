use crate::database::entities::paquetes;
use async_trait::async_trait;
use domain::{DomainError, NewPackage, Package, PackageId, PackageRepository, SearchTerm};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, QueryFilter, QueryOrder, Set, Statement, TransactionTrait,
};
use tracing::debug;

/// Package store backed by a SeaORM connection (SQLite)
pub struct SeaOrmPackageRepository {
    db: DatabaseConnection,
}

impl SeaOrmPackageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_package(model: paquetes::Model) -> Package {
        Package {
            id: PackageId::new(model.id),
            destino: model.destino,
            duracion: model.duracion,
            precio: model.precio,
            descripcion: model.descripcion,
        }
    }

    fn to_active_model(fields: &NewPackage) -> paquetes::ActiveModel {
        paquetes::ActiveModel {
            id: NotSet,
            destino: Set(fields.destino.clone()),
            duracion: Set(fields.duracion.clone()),
            precio: Set(fields.precio),
            descripcion: Set(fields.descripcion.clone()),
        }
    }

    fn storage_error(e: DbErr) -> DomainError {
        DomainError::Storage(format!("Database error: {}", e))
    }

    async fn find_where_like(
        &self,
        column: paquetes::Column,
        term: &SearchTerm,
    ) -> Result<Vec<Package>, DomainError> {
        let pattern = LikeExpr::new(term.like_pattern()).escape('\\');

        let models = paquetes::Entity::find()
            .filter(column.like(pattern))
            .order_by_asc(paquetes::Column::Id)
            .all(&self.db)
            .await
            .map_err(Self::storage_error)?;

        Ok(models.into_iter().map(Self::model_to_package).collect())
    }
}

#[async_trait]
impl PackageRepository for SeaOrmPackageRepository {
    async fn seed(&self, records: &[NewPackage]) -> Result<Vec<Package>, DomainError> {
        let txn = self.db.begin().await.map_err(Self::storage_error)?;

        paquetes::Entity::delete_many()
            .exec(&txn)
            .await
            .map_err(Self::storage_error)?;

        // Restart id assignment at 1
        if txn.get_database_backend() == DbBackend::Sqlite {
            txn.execute(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "DELETE FROM sqlite_sequence WHERE name = ?",
                ["paquetes".into()],
            ))
            .await
            .map_err(Self::storage_error)?;
        }

        if !records.is_empty() {
            paquetes::Entity::insert_many(records.iter().map(Self::to_active_model))
                .exec(&txn)
                .await
                .map_err(Self::storage_error)?;
        }

        let models = paquetes::Entity::find()
            .order_by_asc(paquetes::Column::Id)
            .all(&txn)
            .await
            .map_err(Self::storage_error)?;

        txn.commit().await.map_err(Self::storage_error)?;

        debug!(count = models.len(), "Seeded paquetes table");
        Ok(models.into_iter().map(Self::model_to_package).collect())
    }

    async fn find_all(&self) -> Result<Vec<Package>, DomainError> {
        let models = paquetes::Entity::find()
            .order_by_asc(paquetes::Column::Id)
            .all(&self.db)
            .await
            .map_err(Self::storage_error)?;

        Ok(models.into_iter().map(Self::model_to_package).collect())
    }

    async fn find_by_description(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError> {
        self.find_where_like(paquetes::Column::Descripcion, term)
            .await
    }

    async fn find_by_destination(&self, term: &SearchTerm) -> Result<Vec<Package>, DomainError> {
        self.find_where_like(paquetes::Column::Destino, term).await
    }

    async fn create(&self, fields: &NewPackage) -> Result<Package, DomainError> {
        // Anything the engine refuses on insert is reported as a rejected field set
        let model = Self::to_active_model(fields)
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Validation(format!("Database rejected package: {}", e)))?;

        Ok(Self::model_to_package(model))
    }

    async fn delete(&self, id: PackageId) -> Result<bool, DomainError> {
        let result = paquetes::Entity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(Self::storage_error)?;

        Ok(result.rows_affected > 0)
    }
}
