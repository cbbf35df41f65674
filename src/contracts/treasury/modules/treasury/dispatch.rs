use ink::{
    env::{
        call::{build_call, ExecutionInput, Selector},
        CallFlags, DefaultEnvironment,
    },
    prelude::{vec, vec::Vec},
};
use pendzl::traits::{AccountId, Balance};

/// Performs a single outbound call of a proposal.
pub trait CallDispatcher {
    fn dispatch(
        &mut self,
        target: &AccountId,
        value: Balance,
        calldata: &[u8],
    ) -> Result<(), DispatchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// Non-empty calldata shorter than a selector.
    MalformedCalldata,
    TransferFailed,
    /// The callee could not be called or reverted.
    CallReverted,
    /// The callee did not recognize the selector or could not decode the input.
    LangError,
}

/// Dispatches calls through the contracts pallet.
///
/// Empty calldata is a plain transfer of `value`. Otherwise the first four bytes are
/// the message selector and the rest is passed to the callee as is.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvDispatcher;

impl CallDispatcher for EnvDispatcher {
    fn dispatch(
        &mut self,
        target: &AccountId,
        value: Balance,
        calldata: &[u8],
    ) -> Result<(), DispatchError> {
        if calldata.is_empty() {
            return ink::env::transfer::<DefaultEnvironment>(*target, value)
                .map_err(|_| DispatchError::TransferFailed);
        }

        let (selector, input) = split_calldata(calldata)?;
        // reentry is allowed so that proposals can call the treasury's own messages
        match build_call::<DefaultEnvironment>()
            .call(*target)
            .transferred_value(value)
            .exec_input(ExecutionInput::new(selector).push_arg(CallInput(input)))
            .call_flags(CallFlags::ALLOW_REENTRY)
            .returns::<ReturnData>()
            .try_invoke()
        {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(_)) => Err(DispatchError::LangError),
            Err(_) => Err(DispatchError::CallReverted),
        }
    }
}

pub fn split_calldata(calldata: &[u8]) -> Result<(Selector, &[u8]), DispatchError> {
    if calldata.len() < 4 {
        return Err(DispatchError::MalformedCalldata);
    }
    let (selector, input) = calldata.split_at(4);
    let selector: [u8; 4] = selector
        .try_into()
        .map_err(|_| DispatchError::MalformedCalldata)?;
    Ok((Selector::new(selector), input))
}

/// Already encoded call input, written without a length prefix.
pub struct CallInput<'a>(pub &'a [u8]);

impl scale::Encode for CallInput<'_> {
    fn size_hint(&self) -> usize {
        self.0.len()
    }

    fn encode_to<T: scale::Output + ?Sized>(&self, dest: &mut T) {
        dest.write(self.0);
    }
}

/// Raw output of a call. Consumes whatever the callee returned so that callees with any
/// return type are accepted.
pub struct ReturnData(pub Vec<u8>);

impl scale::Decode for ReturnData {
    fn decode<I: scale::Input>(input: &mut I) -> Result<Self, scale::Error> {
        let len = input.remaining_len()?.unwrap_or(0);
        let mut data = vec![0u8; len];
        input.read(&mut data)?;
        Ok(ReturnData(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale::{Decode, Encode};

    #[test]
    fn calldata_is_split_into_selector_and_input() {
        let (selector, input) = split_calldata(&[0xde, 0xad, 0xbe, 0xef, 7, 0, 0, 0]).unwrap();

        assert_eq!(selector.to_bytes(), [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(input, &[7, 0, 0, 0]);
    }

    #[test]
    fn selector_without_input_is_valid() {
        let (selector, input) = split_calldata(&[1, 2, 3, 4]).unwrap();

        assert_eq!(selector.to_bytes(), [1, 2, 3, 4]);
        assert!(input.is_empty());
    }

    #[test]
    fn calldata_shorter_than_selector_is_rejected() {
        assert!(matches!(
            split_calldata(&[1, 2, 3]),
            Err(DispatchError::MalformedCalldata)
        ));
    }

    #[test]
    fn call_input_is_passed_through_verbatim() {
        assert_eq!(CallInput(&[1, 2, 3]).encode(), vec![1, 2, 3]);
    }

    #[test]
    fn return_data_consumes_everything() {
        let output = [0u8, 0, 42, 1];
        let decoded = ReturnData::decode(&mut &output[..]).unwrap();

        assert_eq!(decoded.0, vec![0, 0, 42, 1]);
    }
}
