//! Python exception class for `InputError`

use pyo3::exceptions::PyException;
use pyo3::prelude::*;

use crate::error::InputError;

/// Exception raised for incorrect input to Tasmanian
///
/// # Example (from Python)
///
/// ```python
/// try:
///     grid.makeGlobalGrid(-1, 1, 2, "level", "clenshaw-curtis")
/// except TasmanianInputError as err:
///     print(err.sVariable)   # "iDimension"
///     err.printInfo()
/// ```
#[pyclass(name = "TasmanianInputError", extends = PyException, subclass, module = "tasmanian_config")]
pub struct PyInputError {
    /// Name of the variable with the incorrect value
    #[pyo3(get, name = "sVariable")]
    variable_name: String,
    #[pyo3(get, name = "sMessage")]
    message: String,
}

#[pymethods]
impl PyInputError {
    #[new]
    #[pyo3(signature = (s_var, s_mess))]
    fn new(s_var: String, s_mess: String) -> Self {
        PyInputError {
            variable_name: s_var,
            message: s_mess,
        }
    }

    /// Print the offending variable and the message
    ///
    /// Goes through Python's `print`, so `sys.stdout` redirection applies.
    #[pyo3(name = "printInfo")]
    fn print_info(&self, py: Python<'_>) -> PyResult<()> {
        let print = py.import_bound("builtins")?.getattr("print")?;
        print.call1((self.to_input_error().headline(),))?;
        print.call1((self.message.as_str(),))?;
        Ok(())
    }

    fn __str__(&self) -> String {
        self.to_input_error().to_string()
    }
}

impl PyInputError {
    fn to_input_error(&self) -> InputError {
        InputError::new(self.variable_name.as_str(), self.message.as_str())
    }
}

impl From<InputError> for PyErr {
    fn from(err: InputError) -> Self {
        PyErr::new::<PyInputError, _>((
            err.variable_name().to_string(),
            err.message().to_string(),
        ))
    }
}
