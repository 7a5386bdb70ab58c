//! The adapter method surface and the table of methods the mock implements.

use std::fmt;
use std::str::FromStr;

use hatch_stub::CallbackStyle;

use crate::error::AdapterError;

macro_rules! adapter_methods {
    ($($variant:ident => $name:literal,)+) => {
        /// Every method of the adapter surface the mock stands in for.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AdapterMethod {
            $($variant,)+
        }

        impl AdapterMethod {
            pub const ALL: &'static [AdapterMethod] = &[$(AdapterMethod::$variant,)+];

            /// The method's name on the adapter object.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(AdapterMethod::$variant => $name,)+
                }
            }
        }

        impl FromStr for AdapterMethod {
            type Err = AdapterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(AdapterMethod::$variant),)+
                    other => Err(AdapterError::UnknownMethod(other.to_string())),
                }
            }
        }
    };
}

adapter_methods! {
    GetObject => "getObject",
    SetObject => "setObject",
    SetObjectNotExists => "setObjectNotExists",
    ExtendObject => "extendObject",
    DelObject => "delObject",
    GetForeignObject => "getForeignObject",
    GetForeignObjects => "getForeignObjects",
    SetForeignObject => "setForeignObject",
    SetForeignObjectNotExists => "setForeignObjectNotExists",
    ExtendForeignObject => "extendForeignObject",
    DelForeignObject => "delForeignObject",
    FindForeignObject => "findForeignObject",
    GetAdapterObjects => "getAdapterObjects",
    GetState => "getState",
    GetStates => "getStates",
    SetState => "setState",
    SetStateChanged => "setStateChanged",
    DelState => "delState",
    GetForeignState => "getForeignState",
    GetForeignStates => "getForeignStates",
    SetForeignState => "setForeignState",
    SetForeignStateChanged => "setForeignStateChanged",
    DelForeignState => "delForeignState",
    On => "on",
    RemoveListener => "removeListener",
    RemoveAllListeners => "removeAllListeners",
    Terminate => "terminate",
    GetPort => "getPort",
    Stop => "stop",
    CheckPassword => "checkPassword",
    SetPassword => "setPassword",
    CheckGroup => "checkGroup",
    CalculatePermissions => "calculatePermissions",
    GetCertificates => "getCertificates",
    SendTo => "sendTo",
    SendToHost => "sendToHost",
    IdToDcs => "idToDCS",
    GetHistory => "getHistory",
    SetBinaryState => "setBinaryState",
    GetBinaryState => "getBinaryState",
    GetEnum => "getEnum",
    GetEnums => "getEnums",
    AddChannelToEnum => "addChannelToEnum",
    DeleteChannelFromEnum => "deleteChannelFromEnum",
    AddStateToEnum => "addStateToEnum",
    DeleteStateFromEnum => "deleteStateFromEnum",
    SubscribeObjects => "subscribeObjects",
    SubscribeForeignObjects => "subscribeForeignObjects",
    UnsubscribeObjects => "unsubscribeObjects",
    UnsubscribeForeignObjects => "unsubscribeForeignObjects",
    SubscribeStates => "subscribeStates",
    SubscribeForeignStates => "subscribeForeignStates",
    UnsubscribeStates => "unsubscribeStates",
    UnsubscribeForeignStates => "unsubscribeForeignStates",
    CreateDevice => "createDevice",
    DeleteDevice => "deleteDevice",
    CreateChannel => "createChannel",
    DeleteChannel => "deleteChannel",
    CreateState => "createState",
    DeleteState => "deleteState",
    GetDevices => "getDevices",
    GetChannels => "getChannels",
    GetChannelsOf => "getChannelsOf",
    GetStatesOf => "getStatesOf",
    ReadDir => "readDir",
    MkDir => "mkDir",
    ReadFile => "readFile",
    WriteFile => "writeFile",
    DelFile => "delFile",
    Unlink => "unlink",
    Rename => "rename",
    ChmodFile => "chmodFile",
    FormatValue => "formatValue",
    FormatDate => "formatDate",
}

/// Methods the mock gives real behavior, with the callback shape each
/// offers. Everything else is an inert stub.
pub const IMPLEMENTED_METHODS: &[(AdapterMethod, CallbackStyle)] = &[
    (AdapterMethod::GetObject, CallbackStyle::Normal),
    (AdapterMethod::SetObject, CallbackStyle::Normal),
    (AdapterMethod::SetObjectNotExists, CallbackStyle::Normal),
    (AdapterMethod::ExtendObject, CallbackStyle::Normal),
    (AdapterMethod::DelObject, CallbackStyle::Normal),
    (AdapterMethod::GetForeignObject, CallbackStyle::Normal),
    (AdapterMethod::GetForeignObjects, CallbackStyle::Normal),
    (AdapterMethod::SetForeignObject, CallbackStyle::Normal),
    (AdapterMethod::SetForeignObjectNotExists, CallbackStyle::Normal),
    (AdapterMethod::ExtendForeignObject, CallbackStyle::Normal),
    (AdapterMethod::DelForeignObject, CallbackStyle::Normal),
    (AdapterMethod::GetAdapterObjects, CallbackStyle::NoError),
    (AdapterMethod::GetState, CallbackStyle::Normal),
    (AdapterMethod::GetStates, CallbackStyle::Normal),
    (AdapterMethod::SetState, CallbackStyle::Normal),
    (AdapterMethod::SetStateChanged, CallbackStyle::Normal),
    (AdapterMethod::DelState, CallbackStyle::Normal),
    (AdapterMethod::GetForeignState, CallbackStyle::Normal),
    (AdapterMethod::GetForeignStates, CallbackStyle::Normal),
    (AdapterMethod::SetForeignState, CallbackStyle::Normal),
    (AdapterMethod::SetForeignStateChanged, CallbackStyle::Normal),
    (AdapterMethod::DelForeignState, CallbackStyle::Normal),
    (AdapterMethod::On, CallbackStyle::None),
    (AdapterMethod::RemoveListener, CallbackStyle::None),
    (AdapterMethod::RemoveAllListeners, CallbackStyle::None),
    (AdapterMethod::Terminate, CallbackStyle::None),
];

impl AdapterMethod {
    /// Whether the mock gives this method real behavior.
    pub fn is_implemented(&self) -> bool {
        IMPLEMENTED_METHODS.iter().any(|(m, _)| m == self)
    }

    /// Callback shape of the method. Inert methods have none.
    pub fn callback_style(&self) -> CallbackStyle {
        IMPLEMENTED_METHODS
            .iter()
            .find(|(m, _)| m == self)
            .map_or(CallbackStyle::None, |(_, style)| *style)
    }

    /// Methods without harness behavior.
    pub fn inert() -> impl Iterator<Item = AdapterMethod> {
        Self::ALL.iter().copied().filter(|m| !m.is_implemented())
    }
}

impl fmt::Display for AdapterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
