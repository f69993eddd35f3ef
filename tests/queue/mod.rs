mod arity;
