//! Subscription requests and their add-on/discount modifications.

use crate::enums::{DurationUnit, TransactionType};
use crate::money::Amount;
use crate::request_builder::{Request, RequestBuilder};
use crate::requests::descriptor::DescriptorRequest;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionOptionsRequest {
    do_not_inherit_add_ons_or_discounts: Option<bool>,
    prorate_charges: Option<bool>,
    replace_all_add_ons_and_discounts: Option<bool>,
    revert_subscription_on_proration_failure: Option<bool>,
    start_immediately: Option<bool>,
}

impl SubscriptionOptionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn do_not_inherit_add_ons_or_discounts(mut self, value: bool) -> Self {
        self.do_not_inherit_add_ons_or_discounts = Some(value);
        self
    }

    pub fn prorate_charges(mut self, value: bool) -> Self {
        self.prorate_charges = Some(value);
        self
    }

    pub fn replace_all_add_ons_and_discounts(mut self, value: bool) -> Self {
        self.replace_all_add_ons_and_discounts = Some(value);
        self
    }

    pub fn revert_subscription_on_proration_failure(mut self, value: bool) -> Self {
        self.revert_subscription_on_proration_failure = Some(value);
        self
    }

    pub fn start_immediately(mut self, value: bool) -> Self {
        self.start_immediately = Some(value);
        self
    }
}

impl Request for SubscriptionOptionsRequest {
    const ROOT: &'static str = "options";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element(
                "do_not_inherit_add_ons_or_discounts",
                self.do_not_inherit_add_ons_or_discounts,
            )
            .add_element("prorate_charges", self.prorate_charges)
            .add_element(
                "replace_all_add_ons_and_discounts",
                self.replace_all_add_ons_and_discounts,
            )
            .add_element(
                "revert_subscription_on_proration_failure",
                self.revert_subscription_on_proration_failure,
            )
            .add_element("start_immediately", self.start_immediately)
    }
}

/// Adds an add-on or discount inherited from a plan-level definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddModificationRequest {
    inherited_from_id: Option<String>,
    amount: Option<Amount>,
    never_expires: Option<bool>,
    number_of_billing_cycles: Option<u32>,
    quantity: Option<u32>,
}

impl AddModificationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inherited_from_id(mut self, id: impl Into<String>) -> Self {
        self.inherited_from_id = Some(id.into());
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn never_expires(mut self, never_expires: bool) -> Self {
        self.never_expires = Some(never_expires);
        self
    }

    pub fn number_of_billing_cycles(mut self, cycles: u32) -> Self {
        self.number_of_billing_cycles = Some(cycles);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

impl Request for AddModificationRequest {
    const ROOT: &'static str = "modification";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("inherited_from_id", self.inherited_from_id.as_deref())
            .add_element("amount", self.amount)
            .add_element("never_expires", self.never_expires)
            .add_element("number_of_billing_cycles", self.number_of_billing_cycles)
            .add_element("quantity", self.quantity)
    }
}

/// Changes an add-on or discount already on the subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateModificationRequest {
    existing_id: Option<String>,
    amount: Option<Amount>,
    never_expires: Option<bool>,
    number_of_billing_cycles: Option<u32>,
    quantity: Option<u32>,
}

impl UpdateModificationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn existing_id(mut self, id: impl Into<String>) -> Self {
        self.existing_id = Some(id.into());
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn never_expires(mut self, never_expires: bool) -> Self {
        self.never_expires = Some(never_expires);
        self
    }

    pub fn number_of_billing_cycles(mut self, cycles: u32) -> Self {
        self.number_of_billing_cycles = Some(cycles);
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }
}

impl Request for UpdateModificationRequest {
    const ROOT: &'static str = "modification";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("existing_id", self.existing_id.as_deref())
            .add_element("amount", self.amount)
            .add_element("never_expires", self.never_expires)
            .add_element("number_of_billing_cycles", self.number_of_billing_cycles)
            .add_element("quantity", self.quantity)
    }
}

/// Add, remove and update lists for a subscription's add-ons or discounts.
///
/// Empty lists are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModificationsRequest {
    add: Vec<AddModificationRequest>,
    remove: Vec<String>,
    update: Vec<UpdateModificationRequest>,
}

impl ModificationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, f: impl FnOnce(AddModificationRequest) -> AddModificationRequest) -> Self {
        self.add.push(f(AddModificationRequest::new()));
        self
    }

    pub fn remove<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn update(
        mut self,
        f: impl FnOnce(UpdateModificationRequest) -> UpdateModificationRequest,
    ) -> Self {
        self.update.push(f(UpdateModificationRequest::new()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.remove.is_empty() && self.update.is_empty()
    }

    /// Collects the lists under `root` (`add_ons` or `discounts`).
    pub fn build_request(&self, root: &str) -> RequestBuilder {
        let add: Vec<RequestBuilder> = self
            .add
            .iter()
            .map(|m| m.build_request(AddModificationRequest::ROOT))
            .collect();
        let update: Vec<RequestBuilder> = self
            .update
            .iter()
            .map(|m| m.build_request(UpdateModificationRequest::ROOT))
            .collect();

        RequestBuilder::new(root)
            .add_element_if(!add.is_empty(), "add", add)
            .add_element_if(!self.remove.is_empty(), "remove", self.remove.clone())
            .add_element_if(!update.is_empty(), "update", update)
    }
}

/// Creates or updates a recurring billing subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionRequest {
    id: Option<String>,
    add_ons: Option<ModificationsRequest>,
    billing_day_of_month: Option<u32>,
    descriptor: Option<DescriptorRequest>,
    discounts: Option<ModificationsRequest>,
    first_billing_date: Option<NaiveDate>,
    merchant_account_id: Option<String>,
    never_expires: Option<bool>,
    number_of_billing_cycles: Option<u32>,
    options: Option<SubscriptionOptionsRequest>,
    payment_method_token: Option<String>,
    plan_id: Option<String>,
    price: Option<Amount>,
    trial_period: Option<bool>,
    trial_duration: Option<u32>,
    trial_duration_unit: Option<DurationUnit>,
}

impl SubscriptionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn add_ons(mut self, f: impl FnOnce(ModificationsRequest) -> ModificationsRequest) -> Self {
        self.add_ons = Some(f(self.add_ons.take().unwrap_or_default()));
        self
    }

    pub fn billing_day_of_month(mut self, day: u32) -> Self {
        self.billing_day_of_month = Some(day);
        self
    }

    pub fn descriptor(mut self, f: impl FnOnce(DescriptorRequest) -> DescriptorRequest) -> Self {
        self.descriptor = Some(f(self.descriptor.take().unwrap_or_default()));
        self
    }

    pub fn discounts(
        mut self,
        f: impl FnOnce(ModificationsRequest) -> ModificationsRequest,
    ) -> Self {
        self.discounts = Some(f(self.discounts.take().unwrap_or_default()));
        self
    }

    pub fn first_billing_date(mut self, date: NaiveDate) -> Self {
        self.first_billing_date = Some(date);
        self
    }

    pub fn merchant_account_id(mut self, id: impl Into<String>) -> Self {
        self.merchant_account_id = Some(id.into());
        self
    }

    pub fn never_expires(mut self, never_expires: bool) -> Self {
        self.never_expires = Some(never_expires);
        self
    }

    pub fn number_of_billing_cycles(mut self, cycles: u32) -> Self {
        self.number_of_billing_cycles = Some(cycles);
        self
    }

    pub fn options(
        mut self,
        f: impl FnOnce(SubscriptionOptionsRequest) -> SubscriptionOptionsRequest,
    ) -> Self {
        self.options = Some(f(self.options.take().unwrap_or_default()));
        self
    }

    pub fn payment_method_token(mut self, token: impl Into<String>) -> Self {
        self.payment_method_token = Some(token.into());
        self
    }

    pub fn plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    pub fn price(mut self, price: Amount) -> Self {
        self.price = Some(price);
        self
    }

    pub fn trial_period(mut self, has_trial_period: bool) -> Self {
        self.trial_period = Some(has_trial_period);
        self
    }

    pub fn trial_duration(mut self, duration: u32) -> Self {
        self.trial_duration = Some(duration);
        self
    }

    pub fn trial_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.trial_duration_unit = Some(unit);
        self
    }
}

impl Request for SubscriptionRequest {
    const ROOT: &'static str = "subscription";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("id", self.id.as_deref())
            .add_element("add_ons", self.add_ons.as_ref().map(|m| m.build_request("add_ons")))
            .add_element("billing_day_of_month", self.billing_day_of_month)
            .add_element(
                "descriptor",
                self.descriptor.as_ref().map(|d| d.build_request("descriptor")),
            )
            .add_element(
                "discounts",
                self.discounts.as_ref().map(|m| m.build_request("discounts")),
            )
            .add_element("first_billing_date", self.first_billing_date)
            .add_element("merchant_account_id", self.merchant_account_id.as_deref())
            .add_element("never_expires", self.never_expires)
            .add_element("number_of_billing_cycles", self.number_of_billing_cycles)
            .add_element("options", self.options.as_ref().map(|o| o.build_request("options")))
            .add_element("payment_method_token", self.payment_method_token.as_deref())
            .add_element("plan_id", self.plan_id.as_deref())
            .add_element("price", self.price)
            .add_element("trial_period", self.trial_period)
            .add_element("trial_duration", self.trial_duration)
            .add_lower_case_element_if_present("trial_duration_unit", self.trial_duration_unit)
    }
}

/// Charges an existing subscription outside its billing cycle. Always a sale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionTransactionRequest {
    amount: Option<Amount>,
    subscription_id: Option<String>,
}

impl SubscriptionTransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn subscription_id(mut self, subscription_id: impl Into<String>) -> Self {
        self.subscription_id = Some(subscription_id.into());
        self
    }
}

impl Request for SubscriptionTransactionRequest {
    const ROOT: &'static str = "transaction";

    fn build_request(&self, root: &str) -> RequestBuilder {
        RequestBuilder::new(root)
            .add_element("amount", self.amount)
            .add_element("subscription_id", self.subscription_id.as_deref())
            .add_element("type", TransactionType::Sale.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_with_trial() {
        let subscription = SubscriptionRequest::new()
            .plan_id("gold")
            .price(Amount::from_cents(1500))
            .trial_period(true)
            .trial_duration(2)
            .trial_duration_unit(DurationUnit::Month);

        assert_eq!(
            subscription.to_xml(),
            "<subscription><plan-id>gold</plan-id><price>15.00</price>\
             <trial-period>true</trial-period><trial-duration>2</trial-duration>\
             <trial-duration-unit>month</trial-duration-unit></subscription>"
        );
    }

    #[test]
    fn test_first_billing_date_and_options() {
        let subscription = SubscriptionRequest::new()
            .first_billing_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
            .options(|o| o.start_immediately(true));

        assert_eq!(
            subscription.to_xml(),
            "<subscription><first-billing-date type=\"date\">2025-01-31</first-billing-date>\
             <options><start-immediately>true</start-immediately></options></subscription>"
        );
    }

    #[test]
    fn test_add_ons_and_discounts() {
        let subscription = SubscriptionRequest::new()
            .add_ons(|m| {
                m.add(|a| a.inherited_from_id("extra_seat").quantity(3))
                    .update(|u| u.existing_id("support").amount(Amount::from_cents(500)))
            })
            .discounts(|m| m.remove(["promo"]));

        assert_eq!(
            subscription.to_xml(),
            "<subscription><add-ons>\
             <add type=\"array\"><modification><inherited-from-id>extra_seat</inherited-from-id>\
             <quantity>3</quantity></modification></add>\
             <update type=\"array\"><modification><existing-id>support</existing-id>\
             <amount>5.00</amount></modification></update>\
             </add-ons>\
             <discounts><remove type=\"array\"><item>promo</item></remove></discounts>\
             </subscription>"
        );
    }

    #[test]
    fn test_modifications_query_string() {
        let subscription = SubscriptionRequest::new()
            .add_ons(|m| m.add(|a| a.inherited_from_id("seat")).remove(["old"]));

        assert_eq!(
            subscription.to_query_string(),
            "subscription%5Badd_ons%5D%5Badd%5D%5B%5D%5Binherited_from_id%5D=seat&\
             subscription%5Badd_ons%5D%5Bremove%5D%5B%5D=old"
        );
    }

    #[test]
    fn test_empty_modifications_render_empty_block() {
        let modifications = ModificationsRequest::new();
        assert!(modifications.is_empty());
        assert_eq!(modifications.build_request("discounts").to_xml(), "<discounts></discounts>");
    }

    #[test]
    fn test_subscription_transaction_is_always_a_sale() {
        let charge = SubscriptionTransactionRequest::new()
            .subscription_id("sub_1")
            .amount(Amount::from_cents(999));

        assert_eq!(
            charge.to_xml(),
            "<transaction><amount>9.99</amount><subscription-id>sub_1</subscription-id>\
             <type>sale</type></transaction>"
        );
    }
}
