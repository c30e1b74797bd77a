//! Closed value sets used by the gateway.
//!
//! Each enum knows the exact string the gateway uses for every variant.
//! Parsing is lenient: values the crate does not know about map to
//! `Unrecognized` so that new gateway values never break a caller.

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! gateway_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// The string the gateway uses for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Case-insensitive lookup by wire name; unknown names are `Unrecognized`.
            pub fn lookup(name: &str) -> Self {
                let name = name.trim();
                $(
                    if name.eq_ignore_ascii_case($wire) {
                        return $name::$variant;
                    }
                )+
                debug!("Unrecognized {} value {:?}", stringify!($name), name);
                $name::Unrecognized
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::lookup(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name::lookup(&s))
            }
        }
    };
}

gateway_enum! {
    /// Card brand.
    pub enum CardType {
        Amex => "American Express",
        CarteBlanche => "Carte Blanche",
        ChinaUnionPay => "China UnionPay",
        DinersClubInternational => "Diners Club",
        Discover => "Discover",
        Jcb => "JCB",
        Laser => "Laser",
        Maestro => "Maestro",
        MasterCard => "MasterCard",
        Solo => "Solo",
        Switch => "Switch",
        Visa => "Visa",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    /// Whether money moves to (`Sale`) or from (`Credit`) the merchant.
    pub enum TransactionType {
        Credit => "credit",
        Sale => "sale",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    pub enum TransactionStatus {
        AuthorizationExpired => "authorization_expired",
        Authorized => "authorized",
        Authorizing => "authorizing",
        Failed => "failed",
        GatewayRejected => "gateway_rejected",
        ProcessorDeclined => "processor_declined",
        Settled => "settled",
        Settling => "settling",
        SubmittedForSettlement => "submitted_for_settlement",
        Voided => "voided",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    /// Where a transaction was created.
    pub enum TransactionSource {
        Api => "api",
        ControlPanel => "control_panel",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    /// Whether a transaction was created from full card data or a vault token.
    pub enum CreatedUsing {
        FullInformation => "full_information",
        Token => "token",
        Unrecognized => "unrecognized",
    }
}

gateway_enum! {
    pub enum GatewayRejectionReason {
        Avs => "avs",
        AvsAndCvv => "avs_and_cvv",
        Cvv => "cvv",
        Duplicate => "duplicate",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    pub enum EscrowStatus {
        Held => "held",
        HoldPending => "hold_pending",
        ReleasePending => "release_pending",
        Released => "released",
        Refunded => "refunded",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    /// Issuing location of a card relative to the merchant.
    pub enum CustomerLocation {
        International => "international",
        Us => "us",
        Unrecognized => "unrecognized",
    }
}

gateway_enum! {
    pub enum SubscriptionStatus {
        Active => "Active",
        Canceled => "Canceled",
        Expired => "Expired",
        PastDue => "Past Due",
        Pending => "Pending",
        Unrecognized => "Unrecognized",
        Undefined => "Undefined",
    }
}

gateway_enum! {
    /// Unit of a subscription trial period.
    pub enum DurationUnit {
        Day => "day",
        Month => "month",
        Unrecognized => "unrecognized",
        Undefined => "undefined",
    }
}

gateway_enum! {
    /// Outcome of a credit card verification.
    pub enum VerificationStatus {
        Failed => "failed",
        GatewayRejected => "gateway_rejected",
        ProcessorDeclined => "processor_declined",
        Verified => "verified",
        Unrecognized => "unrecognized",
    }
}

gateway_enum! {
    pub enum WebhookKind {
        SubMerchantAccountApproved => "sub_merchant_account_approved",
        SubMerchantAccountDeclined => "sub_merchant_account_declined",
        SubscriptionCanceled => "subscription_canceled",
        SubscriptionChargedSuccessfully => "subscription_charged_successfully",
        SubscriptionChargedUnsuccessfully => "subscription_charged_unsuccessfully",
        SubscriptionExpired => "subscription_expired",
        SubscriptionTrialEnded => "subscription_trial_ended",
        SubscriptionWentActive => "subscription_went_active",
        SubscriptionWentPastDue => "subscription_went_past_due",
        TransactionDisbursed => "transaction_disbursed",
        Unrecognized => "unrecognized",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(CardType::lookup("visa"), CardType::Visa);
        assert_eq!(CardType::lookup("American Express"), CardType::Amex);
        assert_eq!(TransactionType::lookup(" SALE "), TransactionType::Sale);
        assert_eq!(SubscriptionStatus::lookup("past due"), SubscriptionStatus::PastDue);
    }

    #[test]
    fn test_unknown_values_are_unrecognized() {
        assert_eq!(CardType::lookup("Space Card"), CardType::Unrecognized);
        assert_eq!(WebhookKind::lookup(""), WebhookKind::Unrecognized);
    }

    #[test]
    fn test_transaction_sources() {
        assert_eq!(TransactionSource::ALL.len(), 4);
        assert_eq!(TransactionSource::lookup("control_panel"), TransactionSource::ControlPanel);
        assert_eq!(TransactionSource::lookup("recurring"), TransactionSource::Unrecognized);
    }

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(CardType::MasterCard.to_string(), "MasterCard");
        assert_eq!(TransactionStatus::SubmittedForSettlement.to_string(), "submitted_for_settlement");
        assert_eq!(DurationUnit::Month.to_string(), "month");
    }

    #[test]
    fn test_every_variant_round_trips_through_lookup() {
        for status in TransactionStatus::ALL {
            assert_eq!(TransactionStatus::lookup(status.as_str()), *status);
        }
        for kind in WebhookKind::ALL {
            assert_eq!(kind.as_str().parse::<WebhookKind>().unwrap(), *kind);
        }
    }
}
