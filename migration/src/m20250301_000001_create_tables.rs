use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Name).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Cpf).string().null().unique_key())
                    .col(ColumnDef::new(Usuarios::PasswordHash).string().null())
                    .col(ColumnDef::new(Usuarios::AuthProvider).string().not_null())
                    .col(ColumnDef::new(Usuarios::ProviderSubject).string().null())
                    .col(ColumnDef::new(Usuarios::Role).string().not_null())
                    .col(ColumnDef::new(Usuarios::Status).string().not_null())
                    .col(ColumnDef::new(Usuarios::Belt).string().not_null())
                    .col(
                        ColumnDef::new(Usuarios::MustChangePassword)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Usuarios::ProfileComplete)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Usuarios::Phone).string().null())
                    .col(ColumnDef::new(Usuarios::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Usuarios::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Usuarios::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建道馆团队表
        manager
            .create_table(
                Table::create()
                    .table(Equipes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Equipes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Equipes::ResponsibleTeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Equipes::Description).text().null())
                    .col(ColumnDef::new(Equipes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Equipes::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Equipes::Table, Equipes::ResponsibleTeacherId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学员档案表
        manager
            .create_table(
                Table::create()
                    .table(Alunos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alunos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alunos::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alunos::TeamId).big_integer().null())
                    .col(ColumnDef::new(Alunos::BirthDate).string().null())
                    .col(ColumnDef::new(Alunos::Cep).string().null())
                    .col(ColumnDef::new(Alunos::Street).string().null())
                    .col(ColumnDef::new(Alunos::AddressNumber).string().null())
                    .col(ColumnDef::new(Alunos::Neighborhood).string().null())
                    .col(ColumnDef::new(Alunos::City).string().null())
                    .col(ColumnDef::new(Alunos::State).string().null())
                    .col(ColumnDef::new(Alunos::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Alunos::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alunos::Table, Alunos::TeamId)
                            .to(Equipes::Table, Equipes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教练档案表
        manager
            .create_table(
                Table::create()
                    .table(Professores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professores::UserId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professores::TeamId).big_integer().null())
                    .col(
                        ColumnDef::new(Professores::FederationNumber)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Professores::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Professores::Table, Professores::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Professores::Table, Professores::TeamId)
                            .to(Equipes::Table, Equipes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试配置表
        manager
            .create_table(
                Table::create()
                    .table(ExamesConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamesConfig::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamesConfig::Belt).string().not_null())
                    .col(ColumnDef::new(ExamesConfig::Title).string().not_null())
                    .col(ColumnDef::new(ExamesConfig::Topics).text().not_null())
                    .col(
                        ColumnDef::new(ExamesConfig::QuestionCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamesConfig::PassPercentage)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamesConfig::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(ExamesConfig::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamesConfig::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试尝试表
        manager
            .create_table(
                Table::create()
                    .table(ExamesTentativas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamesTentativas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExamesTentativas::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamesTentativas::ExamConfigId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamesTentativas::Status).string().not_null())
                    .col(ColumnDef::new(ExamesTentativas::Questions).text().not_null())
                    .col(
                        ColumnDef::new(ExamesTentativas::StartedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExamesTentativas::FinishedAt)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamesTentativas::Table, ExamesTentativas::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamesTentativas::Table, ExamesTentativas::ExamConfigId)
                            .to(ExamesConfig::Table, ExamesConfig::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试结果表
        manager
            .create_table(
                Table::create()
                    .table(Exames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exames::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exames::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Exames::ExamConfigId).big_integer().not_null())
                    .col(ColumnDef::new(Exames::AttemptId).big_integer().null())
                    .col(ColumnDef::new(Exames::Belt).string().not_null())
                    .col(ColumnDef::new(Exames::Score).integer().not_null())
                    .col(ColumnDef::new(Exames::TotalQuestions).integer().not_null())
                    .col(ColumnDef::new(Exames::Percentage).double().not_null())
                    .col(ColumnDef::new(Exames::Passed).boolean().not_null())
                    .col(ColumnDef::new(Exames::Details).text().null())
                    .col(ColumnDef::new(Exames::TakenAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exames::Table, Exames::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exames::Table, Exames::ExamConfigId)
                            .to(ExamesConfig::Table, ExamesConfig::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Exames::Table, Exames::AttemptId)
                            .to(ExamesTentativas::Table, ExamesTentativas::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建证书表
        manager
            .create_table(
                Table::create()
                    .table(Certificados::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificados::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certificados::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Certificados::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Certificados::ExamConfigId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificados::ExamResultId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Certificados::Belt).string().not_null())
                    .col(ColumnDef::new(Certificados::IssuedBy).big_integer().null())
                    .col(
                        ColumnDef::new(Certificados::IssuedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificados::Table, Certificados::UserId)
                            .to(Usuarios::Table, Usuarios::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificados::Table, Certificados::ExamConfigId)
                            .to(ExamesConfig::Table, ExamesConfig::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Certificados::Table, Certificados::ExamResultId)
                            .to(Exames::Table, Exames::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_alunos_team_id")
                    .table(Alunos::Table)
                    .col(Alunos::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exames_tentativas_user_status")
                    .table(ExamesTentativas::Table)
                    .col(ExamesTentativas::UserId)
                    .col(ExamesTentativas::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_exames_user_id")
                    .table(Exames::Table)
                    .col(Exames::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_certificados_user_exam_config")
                    .table(Certificados::Table)
                    .col(Certificados::UserId)
                    .col(Certificados::ExamConfigId)
                    // 每个用户在同一考试配置下只能持有一张证书
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Certificados::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exames::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamesTentativas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamesConfig::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alunos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Equipes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Usuarios {
    #[sea_orm(iden = "usuarios")]
    Table,
    Id,
    Name,
    Email,
    Cpf,
    PasswordHash,
    AuthProvider,
    ProviderSubject,
    Role,
    Status,
    Belt,
    MustChangePassword,
    ProfileComplete,
    Phone,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Equipes {
    #[sea_orm(iden = "equipes")]
    Table,
    Id,
    Name,
    ResponsibleTeacherId,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Alunos {
    #[sea_orm(iden = "alunos")]
    Table,
    Id,
    UserId,
    TeamId,
    BirthDate,
    Cep,
    Street,
    AddressNumber,
    Neighborhood,
    City,
    State,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Professores {
    #[sea_orm(iden = "professores")]
    Table,
    Id,
    UserId,
    TeamId,
    FederationNumber,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExamesConfig {
    #[sea_orm(iden = "exames_config")]
    Table,
    Id,
    Belt,
    Title,
    Topics,
    QuestionCount,
    PassPercentage,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExamesTentativas {
    #[sea_orm(iden = "exames_tentativas")]
    Table,
    Id,
    UserId,
    ExamConfigId,
    Status,
    Questions,
    StartedAt,
    FinishedAt,
}

#[derive(DeriveIden)]
enum Exames {
    #[sea_orm(iden = "exames")]
    Table,
    Id,
    UserId,
    ExamConfigId,
    AttemptId,
    Belt,
    Score,
    TotalQuestions,
    Percentage,
    Passed,
    Details,
    TakenAt,
}

#[derive(DeriveIden)]
enum Certificados {
    #[sea_orm(iden = "certificados")]
    Table,
    Id,
    Code,
    UserId,
    ExamConfigId,
    ExamResultId,
    Belt,
    IssuedBy,
    IssuedAt,
}
