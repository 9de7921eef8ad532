mod tag;
pub use self::tag::Tag;

mod aws_account;
pub use self::aws_account::{
    AwsAccount, AwsAccountAuthentication, AwsAccountStatus, AwsAccounts, AwsExternalId,
};

mod customer;
pub use self::customer::{
    Customer, CustomerAddress, CustomerBillingConfiguration, CustomerPartnerBillingConfiguration,
    Customers,
};

mod statement;
pub use self::statement::{BillingArtifact, BillingArtifacts, Currency};

mod assignment;
pub use self::assignment::{AwsAccountAssignment, AwsAccountAssignments};

mod price_book;
pub use self::price_book::{
    AccountPriceBookAssignment, AccountPriceBookAssignments, CustomerPriceBookAssignment,
    CustomerPriceBookAssignments,
};

mod organization;
pub use self::organization::{Organization, Organizations};

mod report;
pub use self::report::{
    AwsCostHistoryReport, ReportDimension, ReportMeasure, ReportMeasureMetadata,
    ServiceCategoryMember,
};
