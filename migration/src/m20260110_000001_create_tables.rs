use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（登录身份）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::PinHash).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生（客户）表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::Phone).string().not_null())
                    .col(ColumnDef::new(Students::University).string().null())
                    .col(ColumnDef::new(Students::Remarks).text().null())
                    .col(
                        ColumnDef::new(Students::IsFlagged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Students::ReferredBy).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ReferredBy)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建写手（承接人）表
        manager
            .create_table(
                Table::create()
                    .table(Writers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Writers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Writers::Name).string().not_null())
                    .col(ColumnDef::new(Writers::Contact).string().not_null())
                    .col(ColumnDef::new(Writers::Specialty).string().null())
                    .col(
                        ColumnDef::new(Writers::IsFlagged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Writers::RatingQuality).double().null())
                    .col(ColumnDef::new(Writers::RatingPunctuality).double().null())
                    .col(ColumnDef::new(Writers::RatingCount).big_integer().null())
                    .col(ColumnDef::new(Writers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Writers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建任务（委托稿件）表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::WriterId).big_integer().null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Kind).string().not_null())
                    .col(ColumnDef::new(Assignments::Subject).string().not_null())
                    .col(ColumnDef::new(Assignments::Level).string().not_null())
                    .col(ColumnDef::new(Assignments::Priority).string().not_null())
                    .col(ColumnDef::new(Assignments::Status).string().not_null())
                    .col(ColumnDef::new(Assignments::Deadline).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::DocumentLink).string().null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::WordCount).big_integer().null())
                    .col(ColumnDef::new(Assignments::CostPerWord).double().null())
                    .col(
                        ColumnDef::new(Assignments::WriterCostPerWord)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::Price)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Assignments::PaidAmount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Assignments::WriterPrice).double().null())
                    .col(ColumnDef::new(Assignments::WriterPaidAmount).double().null())
                    .col(ColumnDef::new(Assignments::SunkCosts).double().null())
                    .col(
                        ColumnDef::new(Assignments::IsDissertation)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Assignments::TotalChapters).integer().null())
                    .col(ColumnDef::new(Assignments::Chapters).text().null())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::WriterId)
                            .to(Writers::Table, Writers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 常用查询的索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_student_id")
                    .table(Assignments::Table)
                    .col(Assignments::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_writer_id")
                    .table(Assignments::Table)
                    .col(Assignments::WriterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_status_deadline")
                    .table(Assignments::Table)
                    .col(Assignments::Status)
                    .col(Assignments::Deadline)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Writers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    Name,
    PinHash,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    Name,
    Email,
    Phone,
    University,
    Remarks,
    IsFlagged,
    ReferredBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Writers {
    Table,
    Id,
    Name,
    Contact,
    Specialty,
    IsFlagged,
    RatingQuality,
    RatingPunctuality,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    StudentId,
    WriterId,
    Title,
    Kind,
    Subject,
    Level,
    Priority,
    Status,
    Deadline,
    DocumentLink,
    Description,
    WordCount,
    CostPerWord,
    WriterCostPerWord,
    Price,
    PaidAmount,
    WriterPrice,
    WriterPaidAmount,
    SunkCosts,
    IsDissertation,
    TotalChapters,
    Chapters,
    CreatedAt,
    UpdatedAt,
}
