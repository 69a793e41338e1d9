use proc_macro2::TokenStream;
use quote::{format_ident, quote, quote_spanned, ToTokens, TokenStreamExt as _};
use syn::{
    ext::IdentExt as _,
    parse::{Error, Parse, ParseStream, Result},
    punctuated::Punctuated,
    spanned::Spanned as _,
    Attribute, Ident, ItemFn, LitStr, Path, Token,
};

macro_rules! try_quote {
    ($e:expr) => {
        match $e {
            Ok(parsed) => parsed,
            Err(err) => return err.to_compile_error(),
        }
    };
}

pub(crate) fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = try_quote!(syn::parse2::<ItemFn>(item));

    match &item.sig.generics {
        generics if generics.params.is_empty() => (),
        generics => {
            return Error::new_spanned(generics, "test functions cannot take generic parameters")
                .to_compile_error()
        }
    }

    if let Some(asyncness) = item.sig.asyncness {
        return Error::new_spanned(asyncness, "test functions cannot be async").to_compile_error();
    }

    let args = try_quote!(syn::parse2::<Args>(args));

    // extract unittest-specific attributes.
    let params = try_quote!(Params::from_attrs(&mut item.attrs));

    let runner = try_quote!(Runner::from_item(&item, &args));

    // append bounds to where clause.
    if let syn::ReturnType::Type(_, ref ty) = item.sig.output {
        let where_clause = item.sig.generics.make_where_clause();
        where_clause
            .predicates
            .push(syn::parse_quote!(#ty: __ut::Termination));
    }

    Generated {
        item: &item,
        params: &params,
        args: &args,
        runner,
    }
    .to_token_stream()
}

enum FixtureArg {
    Name(LitStr),
    Type(Path),
}

#[derive(Default)]
struct Args {
    name: Option<LitStr>,
    suite: Option<LitStr>,
    fixture: Option<FixtureArg>,
}

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = Args::default();

        let mut errors = Errors::default();
        let pairs = Punctuated::<Arg, Token![,]>::parse_terminated(input)?;
        for pair in pairs {
            errors.append_if_error(args.set(pair));
        }
        errors.into_result()?;

        Ok(args)
    }
}

impl Args {
    fn set(&mut self, arg: Arg) -> Result<()> {
        let duplicated = |key: &Ident| Error::new_spanned(key, "duplicated parameter");
        match arg {
            Arg::Name(key, value) => {
                if self.name.replace(value).is_some() {
                    return Err(duplicated(&key));
                }
            }
            Arg::Suite(key, value) => {
                if self.suite.replace(value).is_some() {
                    return Err(duplicated(&key));
                }
            }
            Arg::Fixture(key, value) => {
                if self.fixture.replace(value).is_some() {
                    return Err(duplicated(&key));
                }
            }
        }
        Ok(())
    }
}

enum Arg {
    Name(Ident, LitStr),
    Suite(Ident, LitStr),
    Fixture(Ident, FixtureArg),
}

impl Parse for Arg {
    fn parse(input: ParseStream) -> Result<Self> {
        let key = input.call(Ident::parse_any)?;
        let _: Token![=] = input.parse()?;
        match key.to_string().as_str() {
            "name" => Ok(Arg::Name(key, input.parse()?)),
            "suite" => Ok(Arg::Suite(key, input.parse()?)),
            "fixture" => {
                let value = if input.peek(LitStr) {
                    FixtureArg::Name(input.parse()?)
                } else {
                    FixtureArg::Type(input.parse()?)
                };
                Ok(Arg::Fixture(key, value))
            }
            _ => Err(Error::new_spanned(key, "unknown parameter name")),
        }
    }
}

struct Params {
    crate_path: Path,
}

impl Params {
    fn from_attrs(attrs: &mut Vec<Attribute>) -> Result<Self> {
        let mut crate_path = None;

        let mut parse_attr = |input: ParseStream<'_>| -> Result<()> {
            match input.call(Ident::parse_any)? {
                id if id == "crate" => {
                    let _: Token![=] = input.parse()?;
                    let path = input.call(Path::parse_mod_style)?;
                    crate_path.replace(path);
                    Ok(())
                }
                id => Err(Error::new_spanned(id, "unknown parameter name")),
            }
        };

        let mut errors = Errors::default();
        attrs.retain(|attr| {
            if !attr.path.is_ident("unittest") {
                return true;
            }
            errors.append_if_error(attr.parse_args_with(&mut parse_attr));
            false
        });
        errors.into_result()?;

        Ok(Self {
            crate_path: crate_path.unwrap_or_else(|| syn::parse_quote!(::unittest)),
        })
    }
}

#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn append_if_error(&mut self, res: Result<()>) {
        match (self.0.as_mut(), res) {
            (Some(errors), Err(error)) => errors.combine(error),
            (None, Err(error)) => self.0 = Some(error),
            (_, Ok(())) => (),
        }
    }

    fn into_result(self) -> Result<()> {
        match self.0 {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

/// How the generated entry point calls the test function.
enum Runner {
    Plain,
    WithFixture(Path),
}

impl Runner {
    fn from_item(item: &ItemFn, args: &Args) -> Result<Self> {
        let inputs = &item.sig.inputs;
        match (inputs.len(), &args.fixture) {
            (1, Some(FixtureArg::Type(path))) => Err(Error::new_spanned(
                inputs,
                format!(
                    "a test bound to fixture `{}` must take the fixture as its first argument",
                    path.to_token_stream()
                ),
            )),
            (1, _) => Ok(Runner::Plain),
            (2, Some(FixtureArg::Type(path))) => Ok(Runner::WithFixture(path.clone())),
            (2, _) => Err(Error::new_spanned(
                inputs,
                "a test taking a fixture argument requires `fixture = Type`",
            )),
            _ => Err(Error::new_spanned(
                &item.sig,
                "test functions must take `&mut TestContext<'_>` \
                 (preceded by `&mut Fixture` for fixture-bound tests)",
            )),
        }
    }
}

struct Generated<'a> {
    params: &'a Params,
    args: &'a Args,
    item: &'a ItemFn,
    runner: Runner,
}

impl Generated<'_> {
    fn test_name(&self) -> LitStr {
        self.args.name.clone().unwrap_or_else(|| {
            let ident = &self.item.sig.ident;
            LitStr::new(&ident.unraw().to_string(), ident.span())
        })
    }

    fn fixture_name(&self) -> LitStr {
        match self.args.fixture {
            Some(FixtureArg::Name(ref name)) => name.clone(),
            Some(FixtureArg::Type(ref path)) => match path.segments.last() {
                Some(segment) => LitStr::new(&segment.ident.unraw().to_string(), path.span()),
                None => LitStr::new("", path.span()),
            },
            None => LitStr::new("", self.item.sig.span()),
        }
    }

    fn suite_name(&self) -> LitStr {
        self.args
            .suite
            .clone()
            .unwrap_or_else(|| LitStr::new("", self.item.sig.span()))
    }
}

impl ToTokens for Generated<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let crate_path = &self.params.crate_path;
        let item = &*self.item;
        let ident = &self.item.sig.ident;

        let test_name = self.test_name();
        let fixture_name = self.fixture_name();
        let suite_name = self.suite_name();
        let details = quote_spanned! { self.item.sig.span() =>
            __ut::test_details!(#test_name, #fixture_name, #suite_name)
        };

        let body = match self.runner {
            Runner::Plain => quote! {
                __ut::Termination::into_result(#ident(ctx))
            },
            Runner::WithFixture(ref fixture) => quote! {
                __ut::run_with_fixture::<#fixture, _>(ctx, #ident)
            },
        };

        let test_case_id = format_ident!("__TEST_CASE_{}", ident);

        tokens.append_all(Some(quote! {
            #[allow(non_upper_case_globals)]
            const #ident: & #crate_path::_test_reexports::TestInfo = {
                #[allow(unused_imports)]
                use #crate_path::_test_reexports as __ut;

                #item

                fn __test_fn(
                    ctx: &mut __ut::TestContext<'_>,
                ) -> __ut::Result<(), __ut::anyhow::Error> {
                    #body
                }

                &__ut::TestInfo::new(#details, __test_fn)
            };
        }));

        tokens.append_all(Some(quote! {
            #crate_path::__test_case! {
                #[allow(non_upper_case_globals)]
                static #test_case_id: & #crate_path::_test_reexports::TestInfo = #ident;
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use syn::{parse::Parser as _, Item};

    fn parse_items(input: ParseStream) -> Result<Vec<Item>> {
        let mut items = vec![];
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(items)
    }

    fn read_file<P: AsRef<Path>>(path: P) -> TokenStream {
        let content = std::fs::read_to_string(path).unwrap();
        let items = parse_items.parse_str(&content).unwrap();
        quote!(#(#items)*)
    }

    fn test_expanded(args: TokenStream, name: &str) {
        let item = read_file(format!("tests/test/{}.in.rs", name));
        let expected = read_file(format!("tests/test/{}.out.rs", name));
        let output = test(args, item);
        assert_eq!(expected.to_string(), output.to_string());
    }

    fn expand_error(args: TokenStream, item: TokenStream) -> String {
        test(args, item).to_string()
    }

    #[test]
    fn plain() {
        test_expanded(TokenStream::new(), "01-plain");
    }

    #[test]
    fn suite_and_fixture_name() {
        test_expanded(
            quote!(suite = "MathSuite", fixture = "Basic", name = "AddOk"),
            "02-suite-fixture-name",
        );
    }

    #[test]
    fn fixture_type() {
        test_expanded(
            quote!(suite = "MathSuite", fixture = fixtures::Basic),
            "03-fixture-type",
        );
    }

    #[test]
    fn return_result() {
        test_expanded(TokenStream::new(), "04-return-result");
    }

    #[test]
    fn crate_path() {
        test_expanded(TokenStream::new(), "05-crate-path");
    }

    #[test]
    fn reject_generics() {
        let output = expand_error(
            TokenStream::new(),
            quote!(fn generic<T>(ctx: &mut TestContext<'_>) {}),
        );
        assert!(output.contains("test functions cannot take generic parameters"));
    }

    #[test]
    fn reject_async() {
        let output = expand_error(
            TokenStream::new(),
            quote!(async fn asynchronous(ctx: &mut TestContext<'_>) {}),
        );
        assert!(output.contains("test functions cannot be async"));
    }

    #[test]
    fn reject_unknown_parameter() {
        let output = expand_error(
            quote!(group = "A"),
            quote!(fn t(ctx: &mut TestContext<'_>) {}),
        );
        assert!(output.contains("unknown parameter name"));
    }

    #[test]
    fn reject_duplicated_parameter() {
        let output = expand_error(
            quote!(suite = "A", suite = "B"),
            quote!(fn t(ctx: &mut TestContext<'_>) {}),
        );
        assert!(output.contains("duplicated parameter"));
    }

    #[test]
    fn reject_fixture_argument_without_type() {
        let output = expand_error(
            quote!(fixture = "Basic"),
            quote!(fn t(f: &mut Basic, ctx: &mut TestContext<'_>) {}),
        );
        assert!(output.contains("requires `fixture = Type`"));
    }
}
