use sea_orm_migration::prelude::*;

use super::m20250301_000001_create_tables::Usuarios;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 课程表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Cursos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cursos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cursos::Title).string().not_null())
                    .col(ColumnDef::new(Cursos::Description).text().null())
                    .col(ColumnDef::new(Cursos::OwnerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Cursos::EditorIds)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Cursos::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Cursos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Cursos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Cursos::Table, Cursos::OwnerId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 课程模块表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Modulos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Modulos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Modulos::CourseId).big_integer().not_null())
                    .col(ColumnDef::new(Modulos::Title).string().not_null())
                    .col(
                        ColumnDef::new(Modulos::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Modulos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Modulos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Modulos::Table, Modulos::CourseId)
                            .to(Cursos::Table, Cursos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 课时表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Aulas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aulas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aulas::ModuleId).big_integer().not_null())
                    .col(ColumnDef::new(Aulas::Title).string().not_null())
                    .col(
                        ColumnDef::new(Aulas::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Aulas::LessonType).string().not_null())
                    .col(ColumnDef::new(Aulas::Content).text().not_null())
                    .col(ColumnDef::new(Aulas::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Aulas::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Aulas::Table, Aulas::ModuleId)
                            .to(Modulos::Table, Modulos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 上传文件表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Arquivos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Arquivos::Token)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Arquivos::OriginalName).string().not_null())
                    .col(ColumnDef::new(Arquivos::StoredName).string().not_null())
                    .col(ColumnDef::new(Arquivos::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Arquivos::FileType).string().not_null())
                    .col(ColumnDef::new(Arquivos::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Arquivos::UploadedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Arquivos::Table, Arquivos::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_modulos_course_id")
                    .table(Modulos::Table)
                    .col(Modulos::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_aulas_module_id")
                    .table(Aulas::Table)
                    .col(Aulas::ModuleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Arquivos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aulas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Modulos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Cursos::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cursos {
    #[sea_orm(iden = "cursos")]
    Table,
    Id,
    Title,
    Description,
    OwnerId,
    EditorIds,
    Published,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Modulos {
    #[sea_orm(iden = "modulos")]
    Table,
    Id,
    CourseId,
    Title,
    Position,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Aulas {
    #[sea_orm(iden = "aulas")]
    Table,
    Id,
    ModuleId,
    Title,
    Position,
    LessonType,
    Content,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Arquivos {
    #[sea_orm(iden = "arquivos")]
    Table,
    Token,
    OriginalName,
    StoredName,
    FileSize,
    FileType,
    UserId,
    UploadedAt,
}
