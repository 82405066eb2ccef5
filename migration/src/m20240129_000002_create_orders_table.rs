use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Orders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Orders::UserId).integer().not_null())
                    .col(ColumnDef::new(Orders::StoreId).integer().not_null())
                    .col(
                        ColumnDef::new(Orders::MerchantOrderId)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Orders::RecipientName).string().not_null())
                    .col(ColumnDef::new(Orders::RecipientPhone).string().not_null())
                    .col(ColumnDef::new(Orders::RecipientAddress).text().not_null())
                    .col(ColumnDef::new(Orders::RecipientCity).integer().not_null())
                    .col(ColumnDef::new(Orders::RecipientZone).integer().not_null())
                    .col(ColumnDef::new(Orders::RecipientArea).integer().not_null())
                    .col(ColumnDef::new(Orders::DeliveryType).integer().not_null())
                    .col(ColumnDef::new(Orders::ItemType).integer().not_null())
                    .col(
                        ColumnDef::new(Orders::SpecialInstruction)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Orders::ItemQuantity).integer().not_null())
                    .col(ColumnDef::new(Orders::ItemWeight).double().not_null())
                    .col(ColumnDef::new(Orders::AmountToCollect).double().not_null())
                    .col(
                        ColumnDef::new(Orders::ItemDescription)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Orders::OrderTypeId)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Orders::TotalFee).double().not_null())
                    .col(ColumnDef::new(Orders::CodFee).double().not_null())
                    .col(
                        ColumnDef::new(Orders::PromoDiscount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Orders::Discount)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Orders::DeliveryFee).double().not_null())
                    .col(
                        ColumnDef::new(Orders::Archive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Orders::OrderStatus)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Orders::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_users")
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing filters on status and archive before scoping by owner
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_status_archive")
                    .table(Orders::Table)
                    .col(Orders::OrderStatus)
                    .col(Orders::Archive)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_orders_user_id")
                    .table(Orders::Table)
                    .col(Orders::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    StoreId,
    MerchantOrderId,
    RecipientName,
    RecipientPhone,
    RecipientAddress,
    RecipientCity,
    RecipientZone,
    RecipientArea,
    DeliveryType,
    ItemType,
    SpecialInstruction,
    ItemQuantity,
    ItemWeight,
    AmountToCollect,
    ItemDescription,
    OrderTypeId,
    TotalFee,
    CodFee,
    PromoDiscount,
    Discount,
    DeliveryFee,
    Archive,
    OrderStatus,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
